//! Assertion helpers for generated headers.

use pretty_assertions::assert_eq;

pub const HEADER_PREAMBLE: &str = "#ifndef VGA_IMAGE_H\n#define VGA_IMAGE_H\n\n";
pub const HEADER_TRAILER: &str = "};\n\n#endif // VGA_IMAGE_H\n";

/// Assert the header framing and return the parsed index rows
pub fn parse_header(text: &str, width: usize, height: usize) -> Vec<Vec<u8>> {
    assert!(
        text.starts_with(HEADER_PREAMBLE),
        "Header should start with include guard, got: {:?}",
        &text[..text.len().min(80)]
    );
    assert!(
        text.ends_with(HEADER_TRAILER),
        "Header should end with closing brace and guard"
    );

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[3],
        format!("const unsigned short vga_image[{height} * {width}] = {{")
    );

    // 4 preamble lines + rows + "};", "", "#endif"
    assert_eq!(lines.len(), 4 + height + 3, "Unexpected line count");

    lines[4..4 + height]
        .iter()
        .enumerate()
        .map(|(row, line)| {
            let body = line
                .strip_suffix(',')
                .unwrap_or_else(|| panic!("Row {row} must end with a comma: {line:?}"));
            let values: Vec<u8> = body
                .split(", ")
                .map(|v| {
                    v.parse::<u8>()
                        .unwrap_or_else(|_| panic!("Row {row}: {v:?} is not an index"))
                })
                .collect();
            assert_eq!(values.len(), width, "Row {row} has wrong value count");
            assert!(
                values.iter().all(|&v| v < 16),
                "Row {row} has an index outside 0..15"
            );
            values
        })
        .collect()
}

/// Expected text of a row filled with a single index
pub fn uniform_row(index: u8, width: usize) -> String {
    let mut row = vec![index.to_string(); width].join(", ");
    row.push(',');
    row
}
