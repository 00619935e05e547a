use voy_core::{
    action::{self, LoginOutcome},
    client::SessionPersistentClient,
    interactive,
};

use super::{GlobalArgs, SubcmdResult};
use crate::config::GlobalConfig;

#[derive(Debug, clap::Args)]
pub struct Args {
    #[arg(short, long)]
    pub username: Option<String>,

    #[arg(short, long)]
    pub password: Option<String>,

    /// Accepted for compatibility; does not affect the login call
    /// (the refresh decision follows `--cleanup`).
    #[arg(long, overrides_with = "no_cache")]
    cache: bool,
    #[arg(long, overrides_with = "cache")]
    no_cache: bool,

    /// Delete the on-disk cookie file after printing (the default).
    #[arg(long, overrides_with = "no_cleanup")]
    cleanup: bool,
    #[arg(long, overrides_with = "cleanup")]
    no_cleanup: bool,
}

impl Args {
    pub fn cache(&self) -> bool {
        self.cache
    }

    pub fn cleanup(&self) -> bool {
        !self.no_cleanup
    }
}

pub async fn exec(args: &Args, global_args: &GlobalArgs) -> SubcmdResult {
    let cfg = GlobalConfig::from_file_and_args(global_args);
    let cred = interactive::complete_credential(args.username.clone(), args.password.clone());

    let mut cli = SessionPersistentClient::new(&cred.username, &cfg.cookie_dir);

    // Historical flag mapping: the refresh decision follows `cleanup`,
    // not `cache`.
    let refresh_cookies = !args.cleanup();
    log::debug!(
        "cache={}, cleanup={}, refresh_cookies={}",
        args.cache(),
        args.cleanup(),
        refresh_cookies
    );

    let outcome = action::login(&mut cli, &cred, refresh_cookies).await?;
    report_outcome(&mut std::io::stdout(), &cli, outcome, args.cleanup())?;
    Ok(())
}

fn report_outcome(
    out: &mut impl std::io::Write,
    cli: &SessionPersistentClient,
    outcome: LoginOutcome,
    cleanup: bool,
) -> std::io::Result<()> {
    match outcome {
        LoginOutcome::ChallengeRequired => writeln!(out, "CHALLENGE")?,
        LoginOutcome::Unauthorized => writeln!(out, "UNAUTHORIZED")?,
        LoginOutcome::Established(session) => {
            for cookie in session.iter() {
                writeln!(out, "{}", cookie)?;
            }
            if cleanup {
                action::discard_session(cli);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use clap::Parser as _;

    use crate::cmd::{GlobalArgs, Subcommand};

    fn parse_login(argv: &[&str]) -> super::Args {
        let argv = ["voy", "login"].iter().chain(argv).copied();
        let app = GlobalArgs::try_parse_from(argv).unwrap();
        let Subcommand::Login(args) = app.subcmd;
        args
    }

    #[test]
    fn flag_defaults() {
        let args = parse_login(&[]);
        assert!(!args.cache());
        assert!(args.cleanup());
    }

    #[test]
    fn explicit_flags() {
        let args = parse_login(&["--cache", "--no-cleanup"]);
        assert!(args.cache());
        assert!(!args.cleanup());
    }

    #[test]
    fn last_flag_of_a_pair_wins() {
        let args = parse_login(&["--cleanup", "--no-cleanup"]);
        assert!(!args.cleanup());

        let args = parse_login(&["--no-cleanup", "--cleanup"]);
        assert!(args.cleanup());

        let args = parse_login(&["--cache", "--no-cache"]);
        assert!(!args.cache());
    }

    #[test]
    fn credential_options() {
        let args = parse_login(&["-u", "alice", "-p", "secret"]);
        assert_eq!(args.username.as_deref(), Some("alice"));
        assert_eq!(args.password.as_deref(), Some("secret"));
    }

    mod outcome_reporting {
        use std::path::{Path, PathBuf};

        use voy_core::{action::LoginOutcome, client::SessionPersistentClient};
        use voy_webclient::Session;

        use super::super::report_outcome;

        fn tmp_cookie_dir() -> PathBuf {
            std::env::temp_dir().join(format!("voy-cli-test-{}", rand::random::<u32>()))
        }

        fn client_with_saved_session(cookie_dir: &Path) -> (SessionPersistentClient, Session) {
            let cli =
                SessionPersistentClient::with_client(voy_webclient::new_client(), "alice", cookie_dir);
            let session = Session::from_set_cookie_headers([
                "JSESSIONID=\"ajax:2717\"; Path=/; Secure",
                "li_at=tok; Domain=.linkedin.com; Secure; SameSite=None",
            ])
            .unwrap();
            cli.save_session_to_storage(&session).unwrap();
            (cli, session)
        }

        fn render(
            cli: &SessionPersistentClient,
            outcome: LoginOutcome,
            cleanup: bool,
        ) -> String {
            let mut buf = Vec::new();
            report_outcome(&mut buf, cli, outcome, cleanup).unwrap();
            String::from_utf8(buf).unwrap()
        }

        #[tokio::test]
        async fn challenge_prints_keyword_only() {
            let dir = tmp_cookie_dir();
            let (cli, _) = client_with_saved_session(&dir);

            let out = render(&cli, LoginOutcome::ChallengeRequired, true);

            assert_eq!(out, "CHALLENGE\n");
            assert!(cli.session_filepath().exists());
            std::fs::remove_dir_all(&dir).ok();
        }

        #[tokio::test]
        async fn unauthorized_prints_keyword_only() {
            let dir = tmp_cookie_dir();
            let (cli, _) = client_with_saved_session(&dir);

            let out = render(&cli, LoginOutcome::Unauthorized, true);

            assert_eq!(out, "UNAUTHORIZED\n");
            assert!(cli.session_filepath().exists());
            std::fs::remove_dir_all(&dir).ok();
        }

        #[tokio::test]
        async fn success_with_cleanup_prints_cookies_then_deletes_file() {
            let dir = tmp_cookie_dir();
            let (cli, session) = client_with_saved_session(&dir);

            let out = render(&cli, LoginOutcome::Established(session), true);

            assert_eq!(
                out,
                "JSESSIONID=\"ajax:2717\"; path=/; secure\n\
                 li_at=tok; domain=.linkedin.com; samesite=none; secure\n"
            );
            assert!(!cli.session_filepath().exists());
            std::fs::remove_dir_all(&dir).ok();
        }

        #[tokio::test]
        async fn success_without_cleanup_keeps_cookie_file() {
            let dir = tmp_cookie_dir();
            let (cli, session) = client_with_saved_session(&dir);

            render(&cli, LoginOutcome::Established(session), false);

            assert!(cli.session_filepath().exists());
            std::fs::remove_dir_all(&dir).ok();
        }
    }
}
