// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Cabinview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Cabinview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Canvas;

pub(crate) fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let mut lines = Vec::<String>::with_capacity(canvas.height());
    for y in 0..canvas.height() {
        let mut line = String::with_capacity(canvas.width());
        for x in 0..canvas.width() {
            // (x, y) is in bounds by construction.
            let ch = canvas.get(x, y).expect("in bounds");
            line.push(ch);
        }

        lines.push(line.trim_end_matches(' ').to_owned());
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::canvas_to_string_trimmed;
    use crate::render::Canvas;

    #[test]
    fn trims_trailing_spaces_and_empty_lines() {
        let mut canvas = Canvas::new(3, 2).expect("canvas");
        canvas.set(0, 0, 'A').expect("set");
        canvas.set(1, 0, ' ').expect("set");
        assert_eq!(canvas_to_string_trimmed(&canvas), "A");
    }
}
