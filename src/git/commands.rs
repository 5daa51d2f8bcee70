use crate::runner::Invocation;
use std::path::{Path, PathBuf};

/// Builds the `git` invocations of a release, in the order they run
#[derive(Debug, Clone, Default)]
pub struct GitCommands {
    remote: Option<String>,
    dir: Option<PathBuf>,
}

impl GitCommands {
    /// `remote` of `None` pushes to the current branch's upstream
    pub fn new(remote: Option<&str>, dir: Option<&Path>) -> Self {
        GitCommands {
            remote: remote.map(str::to_string),
            dir: dir.map(Path::to_path_buf),
        }
    }

    fn git<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new("git", args).in_dir(self.dir.as_deref())
    }

    /// `git add -A`
    pub fn stage_all(&self) -> Invocation {
        self.git(["add", "-A"])
    }

    /// `git commit -m <message>`
    pub fn commit(&self, message: &str) -> Invocation {
        self.git(["commit", "-m", message])
    }

    /// `git tag <name>`
    pub fn tag(&self, name: &str) -> Invocation {
        self.git(["tag", name])
    }

    /// `git push [remote]`
    pub fn push(&self) -> Invocation {
        let mut args = vec!["push".to_string()];
        args.extend(self.remote.clone());
        self.git(args)
    }

    /// `git push [remote] --tags`
    pub fn push_tags(&self) -> Invocation {
        let mut args = vec!["push".to_string()];
        args.extend(self.remote.clone());
        args.push("--tags".to_string());
        self.git(args)
    }

    /// The full publish sequence with a step label for each command
    pub fn release_sequence(&self, message: &str, tag: &str) -> Vec<(&'static str, Invocation)> {
        vec![
            ("git add", self.stage_all()),
            ("git commit", self.commit(message)),
            ("git tag", self.tag(tag)),
            ("git push", self.push()),
            ("git push --tags", self.push_tags()),
        ]
    }
}
