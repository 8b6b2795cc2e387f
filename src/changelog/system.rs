//! OS-facing collaborators: privilege, identity, terminal and stdin.
//!
//! Commands only see the [`Host`] trait, so they can be tested without root
//! or a terminal. [`SystemHost`] is the real thing.

use console::Term;
use nix::unistd::{Uid, User};
use std::io::{self, Read};

pub trait Host {
    /// Whether the process runs with root privileges.
    fn is_privileged(&self) -> bool;

    /// The human behind the process, or an empty string when unknown.
    fn real_user(&self) -> String;

    /// Columns of the attached terminal, if any.
    fn terminal_width(&self) -> Option<usize>;

    fn read_stdin(&self) -> io::Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl Host for SystemHost {
    fn is_privileged(&self) -> bool {
        Uid::effective().is_root()
    }

    fn real_user(&self) -> String {
        resolve_user(
            |key| std::env::var(key).ok(),
            self.is_privileged(),
            || {
                User::from_uid(Uid::current())
                    .ok()
                    .flatten()
                    .map(|user| user.name)
            },
        )
    }

    fn terminal_width(&self) -> Option<usize> {
        Term::stdout()
            .size_checked()
            .map(|(_rows, cols)| usize::from(cols))
    }

    fn read_stdin(&self) -> io::Result<String> {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

/// Picks the acting user, first match wins:
/// `SUDO_USER` (only when running as root), `LOGNAME`, `USER`, then the
/// account of the current uid.
pub fn resolve_user<E, O>(env: E, privileged: bool, os_user: O) -> String
where
    E: Fn(&str) -> Option<String>,
    O: FnOnce() -> Option<String>,
{
    let from_env = |key: &str| env(key).filter(|value| !value.is_empty());

    if privileged {
        if let Some(sudo_user) = from_env("SUDO_USER") {
            return sudo_user;
        }
    }

    from_env("LOGNAME")
        .or_else(|| from_env("USER"))
        .or_else(os_user)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn sudo_user_wins_when_root() {
        let env = env_of(&[("SUDO_USER", "alice"), ("LOGNAME", "root"), ("USER", "root")]);
        assert_eq!(resolve_user(env, true, || None), "alice");
    }

    #[test]
    fn sudo_user_ignored_without_root() {
        let env = env_of(&[("SUDO_USER", "alice"), ("LOGNAME", "bob")]);
        assert_eq!(resolve_user(env, false, || None), "bob");
    }

    #[test]
    fn falls_back_through_user_and_os() {
        let env = env_of(&[("LOGNAME", ""), ("USER", "carol")]);
        assert_eq!(resolve_user(env, false, || Some("os".into())), "carol");

        let env = env_of(&[]);
        assert_eq!(resolve_user(env, true, || Some("daemon".into())), "daemon");
    }

    #[test]
    fn unknown_user_is_empty() {
        assert_eq!(resolve_user(env_of(&[]), false, || None), "");
    }
}
