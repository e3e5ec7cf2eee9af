//! assetdesk roles / matrix commands

use clap::Args;
use rbac::PermissionSet;
use serde::Serialize;
use shared::Role;

use crate::output;
use crate::Context;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoleSummary {
    role: Role,
    description: &'static str,
    capabilities: Vec<&'static str>,
}

fn summaries() -> Vec<RoleSummary> {
    Role::all()
        .iter()
        .map(|role| RoleSummary {
            role: *role,
            description: role.description(),
            capabilities: PermissionSet::for_role(Some(*role))
                .granted()
                .iter()
                .map(|c| c.name())
                .collect(),
        })
        .collect()
}

/// List known roles and what they are granted
#[derive(Debug, Args)]
pub struct RolesCommand {}

impl RolesCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        let summaries = summaries();
        if ctx.json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
            return Ok(());
        }

        println!("Available roles:");
        for summary in &summaries {
            println!("  {} - {}", summary.role, summary.description);
            if summary.capabilities.is_empty() {
                println!("      (no capabilities)");
            } else {
                println!("      {}", summary.capabilities.join(", "));
            }
        }
        Ok(())
    }
}

/// Print the capability x role table
#[derive(Debug, Args)]
pub struct MatrixCommand {}

impl MatrixCommand {
    pub fn run(&self, ctx: &Context) -> anyhow::Result<()> {
        if ctx.json {
            let matrix: Vec<_> = rbac::Capability::all()
                .iter()
                .map(|c| serde_json::json!({ "capability": c, "allowedRoles": c.allowed_roles() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&matrix)?);
        } else {
            print!("{}", output::render_matrix());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summaries_cover_all_roles() {
        let summaries = summaries();
        assert_eq!(summaries.len(), Role::all().len());

        let admin = summaries.iter().find(|s| s.role == Role::IctAdmin).unwrap();
        assert!(admin.capabilities.contains(&"canViewAuditLogs"));

        let facility_admin = summaries.iter().find(|s| s.role == Role::FacilitairAdmin).unwrap();
        assert!(facility_admin.capabilities.is_empty());
    }

    #[test]
    fn test_run_text_and_json() {
        let ctx = Context::default();
        assert!(RolesCommand {}.run(&ctx).is_ok());
        assert!(MatrixCommand {}.run(&ctx).is_ok());

        let ctx = Context { json: true, ..Context::default() };
        assert!(RolesCommand {}.run(&ctx).is_ok());
        assert!(MatrixCommand {}.run(&ctx).is_ok());
    }
}
