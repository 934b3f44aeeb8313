pub const MARKER: char = '=';
pub const MARKER_WIDTH: usize = 50;

/// `<50 '='> <name> <50 '='>`, without a trailing newline.
pub fn section_header(container: &str) -> String {
    let rule: String = std::iter::repeat_n(MARKER, MARKER_WIDTH).collect();
    format!("{rule} {container} {rule}")
}
