// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

//! Tag selection and dependency ordering.
//!
//! Requested tags select scripts, selected scripts pull in the owners of
//! their dependency tags transitively, and the closure is ordered so every
//! script runs after its dependencies. Ties are broken by registration order,
//! making plans deterministic.
//!
//! A dependency tag owned by no registered script is satisfied only by an
//! existing deployment record under that name: the original system resolved
//! such references against prior on-chain deployments, and a fresh run must
//! fail loudly instead of deploying a half-wired system.

use super::{script::ScriptRegistry, store::DeploymentsStore};

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("{script} depends on {tag}, which no script provides and no deployment record satisfies")]
    UnknownDependency { script: String, tag: String },
    #[error("dependency cycle among: {}", .0.join(", "))]
    DependencyCycle(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct PlanStep {
    pub script: String,
    /// Scripts in this plan that must run first.
    pub depends_on: Vec<String>,
    /// Dependency tags satisfied by existing deployment records.
    pub external: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
}

impl Plan {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn position(&self, script: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.script == script)
    }
}

/// Computes the ordered deployment plan for the requested tags. Empty tag
/// entries are ignored; an empty request selects the whole registry.
pub fn plan(
    registry: &ScriptRegistry,
    tags: &[String],
    store: &DeploymentsStore,
) -> Result<Plan, PlanError> {
    let scripts = registry.scripts();
    let requested: Vec<&str> = tags
        .iter()
        .map(String::as_str)
        .filter(|tag| !tag.is_empty())
        .collect();

    let selected: Vec<usize> = if requested.is_empty() {
        (0..scripts.len()).collect()
    } else {
        scripts
            .iter()
            .enumerate()
            .filter(|(_, script)| script.tags.iter().any(|t| requested.contains(&t.as_str())))
            .map(|(i, _)| i)
            .collect()
    };

    // Transitive closure over dependency tags. For each closure member,
    // remember which scripts provide its dependencies and which dependency
    // tags are satisfied by prior records only.
    let mut in_closure = vec![false; scripts.len()];
    let mut providers: Vec<Vec<usize>> = vec![Vec::new(); scripts.len()];
    let mut external: Vec<Vec<String>> = vec![Vec::new(); scripts.len()];
    let mut queue = selected;
    while let Some(i) = queue.pop() {
        if in_closure[i] {
            continue;
        }
        in_closure[i] = true;
        for tag in &scripts[i].dependencies {
            let owners = registry.scripts_with_tag(tag);
            if owners.is_empty() {
                if store.contains(tag) {
                    external[i].push(tag.clone());
                } else {
                    return Err(PlanError::UnknownDependency {
                        script: scripts[i].name.clone(),
                        tag: tag.clone(),
                    });
                }
            } else {
                for owner in &owners {
                    if !providers[i].contains(owner) {
                        providers[i].push(*owner);
                    }
                }
                queue.extend(owners);
            }
        }
    }

    // Kahn-style ordering by repeated scan; scanning in registration order is
    // what makes ties deterministic.
    let mut placed = vec![false; scripts.len()];
    let mut steps = Vec::new();
    loop {
        let mut progressed = false;
        for i in 0..scripts.len() {
            if !in_closure[i] || placed[i] {
                continue;
            }
            if providers[i].iter().all(|&p| placed[p]) {
                placed[i] = true;
                progressed = true;
                steps.push(PlanStep {
                    script: scripts[i].name.clone(),
                    depends_on: providers[i]
                        .iter()
                        .map(|&p| scripts[p].name.clone())
                        .collect(),
                    external: external[i].clone(),
                });
            }
        }
        let remaining: Vec<String> = (0..scripts.len())
            .filter(|&i| in_closure[i] && !placed[i])
            .map(|i| scripts[i].name.clone())
            .collect();
        if remaining.is_empty() {
            break;
        }
        if !progressed {
            return Err(PlanError::DependencyCycle(remaining));
        }
    }

    Ok(Plan { steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::script::{ContractDeployment, DeployScript};

    fn registry() -> ScriptRegistry {
        let mut registry = ScriptRegistry::new();
        // Registered out of dependency order on purpose.
        registry
            .register(
                DeployScript::new("Vault")
                    .tag("Vault")
                    .tag("dev")
                    .dependency("Token")
                    .deploys(ContractDeployment::new("Vault")),
            )
            .unwrap();
        registry
            .register(
                DeployScript::new("Token")
                    .tag("Token")
                    .tag("dev")
                    .deploys(ContractDeployment::new("Token")),
            )
            .unwrap();
        registry
            .register(
                DeployScript::new("Router")
                    .tag("Router")
                    .tag("dev")
                    .dependency("Vault")
                    .dependency("Token")
                    .deploys(ContractDeployment::new("Router")),
            )
            .unwrap();
        registry
    }

    #[test]
    fn orders_by_dependencies() {
        let plan = plan(&registry(), &[], &DeploymentsStore::memory()).unwrap();
        assert_eq!(plan.len(), 3);
        assert!(plan.position("Token").unwrap() < plan.position("Vault").unwrap());
        assert!(plan.position("Vault").unwrap() < plan.position("Router").unwrap());
    }

    #[test]
    fn tag_selection_pulls_dependency_closure() {
        let plan = plan(
            &registry(),
            &["Vault".to_string()],
            &DeploymentsStore::memory(),
        )
        .unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.steps[0].script, "Token");
        assert_eq!(plan.steps[1].script, "Vault");
        assert_eq!(plan.steps[1].depends_on, vec!["Token"]);
    }

    #[test]
    fn empty_tag_entries_are_ignored() {
        let all = plan(
            &registry(),
            &["".to_string(), "dev".to_string()],
            &DeploymentsStore::memory(),
        )
        .unwrap();
        assert_eq!(all.len(), 3);

        // A request of only empty entries is an empty request.
        let all = plan(&registry(), &["".to_string()], &DeploymentsStore::memory()).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn unknown_dependency_without_record_fails() {
        let mut registry = ScriptRegistry::new();
        registry
            .register(DeployScript::new("Vault").tag("dev").dependency("Token"))
            .unwrap();
        let err = plan(&registry, &[], &DeploymentsStore::memory()).unwrap_err();
        assert!(matches!(
            err,
            PlanError::UnknownDependency { script, tag } if script == "Vault" && tag == "Token"
        ));
    }

    #[test]
    fn prior_record_satisfies_unowned_dependency() {
        use alloy::primitives::{keccak256, Address};

        let mut registry = ScriptRegistry::new();
        registry
            .register(DeployScript::new("Vault").tag("dev").dependency("Token"))
            .unwrap();
        let mut store = DeploymentsStore::memory();
        store
            .put(
                "Token",
                crate::core::store::DeploymentRecord {
                    contract: "Token".to_string(),
                    address: Address::repeat_byte(0x22),
                    transaction_hash: None,
                    block_number: None,
                    args: Vec::new(),
                    bytecode_hash: keccak256(b""),
                },
            )
            .unwrap();
        let plan = plan(&registry, &[], &store).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.steps[0].external, vec!["Token"]);
    }

    #[test]
    fn detects_cycles() {
        let mut registry = ScriptRegistry::new();
        registry
            .register(DeployScript::new("A").tag("A").dependency("B"))
            .unwrap();
        registry
            .register(DeployScript::new("B").tag("B").dependency("A"))
            .unwrap();
        let err = plan(&registry, &[], &DeploymentsStore::memory()).unwrap_err();
        assert!(matches!(err, PlanError::DependencyCycle(members) if members.len() == 2));
    }
}
