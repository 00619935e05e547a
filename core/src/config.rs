/// Cookie jar file name for one username.
pub fn cookie_filename(username: &str) -> String {
    format!("{}.jr", username)
}
