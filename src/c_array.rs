pub const INCLUDE_LINE: &str = "#include <stdint.h>";
pub const ARRAY_DECLARATION: &str = "const uint16_t image_data[] = {";
pub const VALUES_PER_LINE: usize = 12;
const INDENT: &str = "    ";

/// Render `data` as a C source file holding one `const uint16_t` array.
///
/// Every body line ends with a comma, the last one included.
pub fn render_c_array(data: &[u16]) -> String {
    let mut text = String::with_capacity(64 + data.len() * 8);
    text.push_str(INCLUDE_LINE);
    text.push_str("\n\n");
    text.push_str(ARRAY_DECLARATION);
    text.push('\n');

    for line in data.chunks(VALUES_PER_LINE) {
        let values: Vec<String> = line.iter().map(|v| format!("0x{v:04X}")).collect();
        text.push_str(INDENT);
        text.push_str(&values.join(", "));
        text.push_str(",\n");
    }

    text.push_str("};\n");
    text
}
