//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and static content and returns results.

use crate::config::{GUEST_USER, HELP_TEXT, HOST_NAME};
use crate::core::VirtualFs;
use crate::core::error::{CommandError, FsError};
use crate::models::{Content, OutputKind, VirtualPath};

use super::sections;
use super::{Command, CommandResult, PathArg, SideEffect};

/// Read-only slice of the session that commands may consult.
#[derive(Clone, Copy)]
pub struct SessionView<'a> {
    pub current_path: &'a VirtualPath,
    pub home: &'a VirtualPath,
    pub fs: &'a VirtualFs,
    pub content: &'a Content,
}

impl SessionView<'_> {
    /// Resolve a path expression against the current directory.
    fn target(&self, arg: Option<&PathArg>) -> VirtualPath {
        match arg {
            Some(p) => self.current_path.join_expr(p.as_str(), self.home),
            None => self.current_path.clone(),
        }
    }
}

/// Parse and execute one raw input line.
pub fn dispatch(raw_line: &str, view: &SessionView) -> CommandResult {
    execute_command(Command::parse_line(raw_line), view)
}

/// Execute a parsed command and return its result.
///
/// Never mutates the session; requested changes come back as a [`SideEffect`].
pub fn execute_command(cmd: Command, view: &SessionView) -> CommandResult {
    let content = view.content;

    match cmd {
        Command::Empty => CommandResult::empty(),
        Command::Help => CommandResult::output(OutputKind::Help, HELP_TEXT.trim_end()),
        Command::About => CommandResult::output(OutputKind::Section, sections::about(content)),
        Command::Skills { detailed } => {
            CommandResult::output(OutputKind::Section, sections::skills(content, detailed))
        }
        Command::Projects(None) => {
            CommandResult::output(OutputKind::Section, sections::projects(content))
        }
        Command::Projects(Some(raw)) => match sections::project_detail(content, &raw) {
            Ok(text) => CommandResult::output(OutputKind::Section, text),
            Err(e) => CommandResult::error(e),
        },
        Command::Experience => {
            CommandResult::output(OutputKind::Section, sections::experience(content))
        }
        Command::Services => CommandResult::output(OutputKind::Section, sections::services(content)),
        Command::Contact => CommandResult::output(OutputKind::Section, sections::contact(content)),
        Command::Social => CommandResult::output(OutputKind::Section, sections::social(content)),
        Command::Stats => CommandResult::output(OutputKind::Section, sections::stats(content)),
        Command::Resume => CommandResult::output(OutputKind::Section, sections::resume()),
        Command::Whoami => {
            CommandResult::output(OutputKind::Info, format!("{}@{}", GUEST_USER, HOST_NAME))
        }
        Command::Date => CommandResult::output(
            OutputKind::Info,
            chrono::Local::now()
                .format("%a %b %d %Y %H:%M:%S GMT%z")
                .to_string(),
        ),
        Command::Clear => CommandResult::effect(OutputKind::Clear, SideEffect::ResetLog),
        Command::Banner => CommandResult::effect(OutputKind::Banner, SideEffect::ShowBanner),
        Command::Theme => CommandResult::output(OutputKind::Theme, sections::themes()),
        Command::Cd(path) => execute_cd(path, view),
        Command::Ls(path) => execute_ls(path, view),
        Command::Cat(path) => execute_cat(path, view),
        Command::Pwd => CommandResult::output(OutputKind::Info, view.current_path.display()),
        Command::Sudo(args) => execute_sudo(&args),
        Command::Hack => CommandResult::output(OutputKind::EasterEgg, sections::HACK),
        Command::Echo(text) => CommandResult::output(OutputKind::Info, text),
        Command::Unknown(name) => CommandResult::error(CommandError::UnknownCommand(name)),
    }
}

/// Execute `cd` command.
fn execute_cd(path: Option<PathArg>, view: &SessionView) -> CommandResult {
    // Bare `cd` goes home
    let target = match path {
        Some(p) => view.current_path.join_expr(p.as_str(), view.home),
        None => view.home.clone(),
    };

    match view.fs.resolve(&target) {
        Ok(_) => CommandResult::effect(OutputKind::Cd, SideEffect::ChangeDirectory(target)),
        Err(e) => CommandResult::error(CommandError::fs("cd", e)),
    }
}

/// Execute `ls` command.
fn execute_ls(path: Option<PathArg>, view: &SessionView) -> CommandResult {
    let target = view.target(path.as_ref());

    match view.fs.resolve(&target) {
        Ok(dir) => {
            let names: Vec<String> = dir
                .list()
                .into_iter()
                .map(|entry| {
                    if entry.is_dir() {
                        format!("{}/", entry.name)
                    } else {
                        entry.name
                    }
                })
                .collect();
            CommandResult::output(OutputKind::Listing, names.join("  "))
        }
        Err(e) => CommandResult::error(CommandError::fs("ls", e)),
    }
}

/// Execute `cat` command.
fn execute_cat(path: Option<PathArg>, view: &SessionView) -> CommandResult {
    let Some(path) = path else {
        return CommandResult::error(CommandError::MissingOperand("cat"));
    };

    let target = view.target(Some(&path));
    let Some(name) = target.name() else {
        // The root itself
        return CommandResult::error(CommandError::fs(
            "cat",
            FsError::IsADirectory(path.to_string()),
        ));
    };

    let read = view
        .fs
        .resolve(&target.parent())
        .and_then(|dir| dir.read(name));

    match read {
        Ok(text) => CommandResult::output(OutputKind::File, text),
        Err(e) => CommandResult::error(CommandError::fs("cat", e)),
    }
}

/// Execute `sudo` command.
fn execute_sudo(args: &[String]) -> CommandResult {
    if args.join(" ").contains("rm -rf") {
        return CommandResult::output(OutputKind::EasterEgg, sections::SUDO_DENIED);
    }

    match args.first() {
        Some(program) => CommandResult::error(CommandError::SudoNotFound(program.clone())),
        None => CommandResult::error(CommandError::MissingOperand("sudo")),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONTENT_JSON;

    struct Fixture {
        fs: VirtualFs,
        content: Content,
        home: VirtualPath,
    }

    impl Fixture {
        fn new() -> Self {
            let content = Content::from_json(CONTENT_JSON).unwrap();
            let fs = VirtualFs::from_content(&content);
            let home = VirtualPath::from_segments(["home", content.profile.user.as_str()]);
            Self { fs, content, home }
        }

        fn run_at(&self, cwd: &VirtualPath, line: &str) -> CommandResult {
            let view = SessionView {
                current_path: cwd,
                home: &self.home,
                fs: &self.fs,
                content: &self.content,
            };
            dispatch(line, &view)
        }

        fn run(&self, line: &str) -> CommandResult {
            self.run_at(&self.home, line)
        }
    }

    #[test]
    fn test_empty_line() {
        let fx = Fixture::new();
        assert_eq!(fx.run("   "), CommandResult::empty());
    }

    #[test]
    fn test_help() {
        let fx = Fixture::new();
        let result = fx.run("help");
        assert_eq!(result.kind, OutputKind::Help);
        assert!(result.content.contains("projects [num]"));
        assert!(result.side_effect.is_none());
    }

    #[test]
    fn test_unknown_command_names_token() {
        let fx = Fixture::new();
        let result = fx.run("Vim file.txt");
        assert!(result.is_error());
        assert!(result.content.contains("Command not found: vim"));
    }

    #[test]
    fn test_projects_index() {
        let fx = Fixture::new();
        let count = fx.content.projects.len();

        let first = fx.run("projects 1");
        assert_eq!(first.kind, OutputKind::Section);
        assert!(first.content.contains(&fx.content.projects[0].title));

        let last = fx.run(&format!("projects {}", count));
        assert!(last.content.contains(&fx.content.projects[count - 1].title));

        for n in [0_i64, count as i64 + 1, -2] {
            let result = fx.run(&format!("projects {}", n));
            assert!(result.is_error());
            assert_eq!(
                result.content,
                CommandError::ProjectIndexOutOfRange(n.to_string()).to_string()
            );
        }

        let huge = fx.run("projects 99999999999999999999");
        assert!(huge.is_error());
        assert_eq!(
            huge.content,
            CommandError::ProjectIndexOutOfRange("99999999999999999999".into()).to_string()
        );
    }

    #[test]
    fn test_cd_side_effect() {
        let fx = Fixture::new();
        let result = fx.run("cd ..");
        assert_eq!(result.kind, OutputKind::Cd);
        assert_eq!(
            result.side_effect,
            Some(SideEffect::ChangeDirectory(fx.home.parent()))
        );

        let result = fx.run("cd /");
        assert_eq!(
            result.side_effect,
            Some(SideEffect::ChangeDirectory(VirtualPath::root()))
        );

        let result = fx.run_at(&VirtualPath::root(), "cd");
        assert_eq!(
            result.side_effect,
            Some(SideEffect::ChangeDirectory(fx.home.clone()))
        );
    }

    #[test]
    fn test_cd_errors_name_target() {
        let fx = Fixture::new();

        let result = fx.run("cd nowhere");
        assert!(result.is_error());
        assert!(result.content.contains("nowhere"));
        assert!(result.side_effect.is_none());

        let result = fx.run("cd about.txt");
        assert_eq!(
            result.content,
            CommandError::fs("cd", FsError::NotADirectory("about.txt".into())).to_string()
        );
    }

    #[test]
    fn test_ls() {
        let fx = Fixture::new();
        let result = fx.run("ls");
        assert_eq!(result.kind, OutputKind::Listing);
        assert!(result.content.starts_with("about.txt  skills.json"));

        let result = fx.run("ls /");
        assert_eq!(result.content, "home/");

        let result = fx.run("ls ghost");
        assert!(result.is_error());
        assert!(result.content.contains("ghost"));
    }

    #[test]
    fn test_cat() {
        let fx = Fixture::new();
        let result = fx.run("cat contact.info");
        assert_eq!(result.kind, OutputKind::File);
        assert!(result.content.starts_with("Email: "));

        let result = fx.run(&format!("cat /home/{}/about.txt", fx.content.profile.user));
        assert_eq!(result.kind, OutputKind::File);
    }

    #[test]
    fn test_cat_directory_is_error() {
        let fx = Fixture::new();
        for line in ["cat ..", "cat /home", "cat /"] {
            let result = fx.run(line);
            assert!(result.is_error(), "{}", line);
            assert!(result.content.contains("Is a directory"), "{}", line);
        }
    }

    #[test]
    fn test_cat_missing() {
        let fx = Fixture::new();
        let result = fx.run("cat nope.txt");
        assert!(result.is_error());
        assert!(result.content.contains("nope.txt"));

        let result = fx.run("cat");
        assert_eq!(
            result.content,
            CommandError::MissingOperand("cat").to_string()
        );
    }

    #[test]
    fn test_lowercasing_hides_mixed_case_files() {
        let fx = Fixture::new();
        let result = fx.run("cat README.md");
        assert!(result.is_error());
        assert!(result.content.contains("readme.md"));
    }

    #[test]
    fn test_pwd() {
        let fx = Fixture::new();
        assert_eq!(fx.run("pwd").content, fx.home.display());
        assert_eq!(fx.run_at(&VirtualPath::root(), "pwd").content, "/");
    }

    #[test]
    fn test_sudo() {
        let fx = Fixture::new();
        let result = fx.run("sudo rm -rf /");
        assert_eq!(result.kind, OutputKind::EasterEgg);

        let result = fx.run("sudo apt install");
        assert!(result.is_error());
        assert!(result.content.contains("apt"));
    }

    #[test]
    fn test_echo() {
        let fx = Fixture::new();
        assert_eq!(fx.run("echo hi  there").content, "hi there");
        assert_eq!(fx.run("echo").content, "");
    }

    #[test]
    fn test_clear_and_banner_effects() {
        let fx = Fixture::new();
        let clear = fx.run("clear");
        assert_eq!(clear.side_effect, Some(SideEffect::ResetLog));
        assert!(clear.content.is_empty());

        let banner = fx.run("banner");
        assert_eq!(banner.side_effect, Some(SideEffect::ShowBanner));
    }

    #[test]
    fn test_content_commands_render() {
        let fx = Fixture::new();
        for line in [
            "about",
            "skills",
            "skills --list",
            "projects",
            "experience",
            "services",
            "contact",
            "social",
            "stats",
            "resume",
            "whoami",
            "date",
            "theme",
            "hack",
        ] {
            let result = fx.run(line);
            assert!(result.kind.is_rendered(), "{}", line);
            assert!(!result.content.is_empty(), "{}", line);
            assert!(result.side_effect.is_none(), "{}", line);
        }
    }
}
