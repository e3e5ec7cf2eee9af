//! assetdesk guard command

use anyhow::Context as _;
use clap::Args;
use rbac::{AccessGuard, Capability, GuardDecision};
use shared::Role;

use crate::output;
use crate::Context;

/// Evaluate an access guard for the acting user
#[derive(Debug, Args)]
pub struct GuardCommand {
    /// Allowed roles (comma-separated); empty denies everyone
    #[arg(short, long, value_delimiter = ',')]
    pub allow: Vec<String>,

    /// Allow exactly the roles granted this capability (e.g. canViewAuditLogs)
    #[arg(long, conflicts_with = "allow")]
    pub capability: Option<String>,
}

impl GuardCommand {
    pub fn guard(&self) -> anyhow::Result<AccessGuard> {
        if let Some(name) = &self.capability {
            let capability = Capability::from_name(name)
                .with_context(|| format!("unknown capability '{}'", name))?;
            return Ok(AccessGuard::for_capability(capability));
        }

        let roles = Role::parse_list(self.allow.as_slice()).context("invalid --allow list")?;
        Ok(AccessGuard::new(roles))
    }

    pub fn evaluate(&self, ctx: &Context) -> anyhow::Result<GuardDecision> {
        Ok(self.guard()?.evaluate(ctx.profile.as_ref()))
    }

    pub fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let decision = self.evaluate(ctx)?;
        if ctx.json {
            let value = match decision {
                GuardDecision::Protected => serde_json::json!({ "protected": true }),
                GuardDecision::Fallback(reason) => {
                    serde_json::json!({ "protected": false, "reason": reason })
                }
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{}", output::render_decision(&decision));
        }
        Ok(())
    }
}
