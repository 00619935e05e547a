use voy_webclient::Credential;

pub mod util {
    use dialoguer::{theme::ColorfulTheme, Input, Password};
    use std::io;

    fn theme() -> ColorfulTheme {
        ColorfulTheme::default()
    }

    pub fn ask_text(prompt: &str) -> io::Result<String> {
        Input::with_theme(&theme())
            .with_prompt(prompt)
            .interact_text()
    }

    pub fn ask_password(prompt: &str) -> io::Result<String> {
        Password::with_theme(&theme())
            .with_prompt(prompt)
            .interact()
    }
}

/// Prompt for whichever credential parts were not given on the command line.
pub fn complete_credential(username: Option<String>, password: Option<String>) -> Credential {
    let username = username
        .unwrap_or_else(|| util::ask_text("username").unwrap_or_else(|e| panic!("{:?}", e)));
    let password = password
        .unwrap_or_else(|| util::ask_password("password").unwrap_or_else(|e| panic!("{:?}", e)));
    Credential::new(username, password)
}
