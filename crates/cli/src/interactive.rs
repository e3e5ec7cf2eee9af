//! Interactive REPL mode
//!
//! Simulates a signed-in session: the profile can change at any time and every
//! command derives permissions from the profile held at that moment.

use audit::AuditLogger;
use rbac::{views, AccessGuard, Control, Screen, Session};
use shared::{AppConfig, Role, RoleClaim, UserProfile};
use std::io::{self, Write};

use crate::output;

const RECENT_AUDIT_ENTRIES: usize = 20;

/// Interactive CLI over a single session
pub struct InteractiveCli {
    session: Session,
    audit: AuditLogger,
}

impl InteractiveCli {
    pub fn new(config: &AppConfig, profile: Option<UserProfile>) -> Self {
        let mut cli = Self {
            session: Session::new(),
            audit: AuditLogger::from_config(&config.audit),
        };
        if profile.is_some() {
            let change = cli.session.update_profile(profile);
            cli.audit.log_profile_change(&change);
        }
        cli
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("assetdesk interactive session");
        println!("Type /help for commands, /quit to exit");
        println!();

        loop {
            print!("[{}] > ", self.session.role_label());
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_command(input) {
                Ok(true) => break,
                Ok(false) => continue,
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let (cmd, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /login <role>      - Sign in with a role (e.g. /login ICT Admin)");
                println!("  /logout            - Sign out");
                println!("  /perms             - Show derived permissions");
                println!("  /view <screen>     - Show control visibility for a screen");
                println!("  /check <control>   - Check whether a single control is visible");
                println!("  /guard <roles>     - Evaluate a guard (comma-separated roles)");
                println!("  /audit             - Show recent audit entries");
                println!("  /roles             - List roles");
                println!("  /status            - Show current status");
                println!("  /quit              - Exit");
            }
            "/login" => {
                if rest.is_empty() {
                    anyhow::bail!("usage: /login <role>");
                }
                let change = self.session.sign_in(UserProfile::new(RoleClaim::parse(rest)));
                self.audit.log_profile_change(&change);
                println!("Signed in as {}", self.session.role_label());
            }
            "/logout" => {
                let change = self.session.sign_out();
                self.audit.log_profile_change(&change);
                println!("Signed out");
            }
            "/perms" => {
                print!("{}", output::render_permissions(&self.session.permissions()));
            }
            "/view" => {
                let screen: Screen = rest.parse()?;
                let states = self.session.controls_for(screen);
                let reachable = self.session.permissions().allows(screen.entry_capability());
                let role = self.session.role_label().to_string();
                self.audit.log_access(
                    &role,
                    screen.name(),
                    reachable,
                    (!reachable).then(|| format!("requires {}", screen.entry_capability())).as_deref(),
                );
                print!("{}", output::render_controls(&states));
            }
            "/check" => {
                let control: Control = rest.parse()?;
                let role = self.session.role_label().to_string();
                match views::check_control(control, &self.session.permissions(), &role) {
                    Ok(()) => {
                        self.audit.log_access(&role, control.name(), true, None);
                        println!("{} {} is visible", output::mark(true), control);
                    }
                    Err(shared::AssetDeskError::ControlNotAccessible(err)) => {
                        self.audit
                            .log_access(&role, control.name(), false, Some(err.reason.as_str()));
                        println!("{} {}", output::mark(false), err);
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            "/guard" => {
                let roles = Role::parse_list(&[rest])?;
                let decision = self.session.evaluate(&AccessGuard::new(roles));
                let role = self.session.role_label().to_string();
                self.audit.log_guard_decision(&role, "guard", &decision);
                println!("{}", output::render_decision(&decision));
            }
            "/audit" => {
                let entries = self
                    .audit
                    .get_recent(&self.session.permissions(), RECENT_AUDIT_ENTRIES)?;
                for entry in entries {
                    println!(
                        "  {} {:?} role={} subject={} {}",
                        entry.timestamp,
                        entry.event_type,
                        entry.role,
                        entry.subject.as_deref().unwrap_or("-"),
                        entry.reason.as_deref().unwrap_or("")
                    );
                }
            }
            "/roles" => {
                println!("Available roles:");
                for (i, role) in Role::all().iter().enumerate() {
                    println!("  {}. {}", i + 1, role);
                }
            }
            "/status" => {
                println!("Status:");
                if let Some(profile) = self.session.profile() {
                    if !profile.label().is_empty() {
                        println!("  User: {}", profile.label());
                    }
                }
                println!("  Role: {}", self.session.role_label());
                let screens = views::accessible_screens(&self.session.permissions());
                let names: Vec<_> = screens.iter().map(|s| s.name()).collect();
                println!("  Screens: {}", names.join(", "));
                println!("  Audit entries: {}", self.audit.get_stats().total_entries);
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }
}
