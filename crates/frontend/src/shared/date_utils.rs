/// Format an ISO date for display, DD/MM/YYYY.
///
/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024". Anything else is returned as is.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}
