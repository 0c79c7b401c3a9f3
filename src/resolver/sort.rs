//! Install plan construction using depth-first search (DFS)
//!
//! Dependencies are emitted before their dependents.
//!
//! ## Algorithm
//!
//! Uses DFS with three-color marking to detect cycles and produce ordering:
//!
//! 1. **WHITE** (unvisited): app hasn't been processed
//! 2. **GRAY** (on the active path): app is in the current recursion stack
//! 3. **BLACK** (emitted): app is already in the plan
//!
//! Reaching a GRAY app is a cycle. Reaching a BLACK app is a no-op, so shared
//! dependencies (diamonds) appear once.

use std::collections::HashSet;

use super::plan::InstallPlan;
use crate::catalog::AppCatalog;
use crate::error::{Better11Error, Result};

/// Context for plan construction
struct PlanContext<'a> {
    catalog: &'a AppCatalog,
    /// Emitted apps (BLACK)
    emitted: HashSet<String>,
    /// Active recursion path (GRAY), in visiting order for cycle reporting
    path: Vec<String>,
    /// Plan in dependency order
    order: Vec<String>,
}

/// Build the dependency-first install plan for `root_app_id`
///
/// Sibling dependencies are visited in declared order, so the plan is
/// deterministic.
///
/// # Errors
///
/// - `AppNotFound` if the root is not in the catalog
/// - `MissingDependency` if any reachable entry references an unknown id
/// - `DependencyCycle` if a dependency leads back onto the active path
///
/// # Example
///
/// ```text
/// Dependencies:
///   a depends on b
///   b depends on c
///
/// build_plan(catalog, "a") => [c, b, a]
/// ```
pub fn build_plan(catalog: &AppCatalog, root_app_id: &str) -> Result<InstallPlan> {
    catalog.require(root_app_id)?;

    let mut ctx = PlanContext {
        catalog,
        emitted: HashSet::new(),
        path: Vec::new(),
        order: Vec::new(),
    };
    visit(&mut ctx, root_app_id)?;

    tracing::debug!(root = root_app_id, plan = ?ctx.order, "install plan built");
    Ok(InstallPlan::new(ctx.order))
}

fn visit(ctx: &mut PlanContext, app_id: &str) -> Result<()> {
    if let Some(start) = ctx.path.iter().position(|id| id == app_id) {
        let mut chain: Vec<&str> = ctx.path[start..].iter().map(String::as_str).collect();
        chain.push(app_id);
        return Err(Better11Error::DependencyCycle {
            chain: chain.join(" -> "),
        });
    }

    if ctx.emitted.contains(app_id) {
        return Ok(());
    }

    let catalog = ctx.catalog;
    let app = catalog.require(app_id)?;

    ctx.path.push(app_id.to_string());
    for dependency in &app.dependencies {
        if !catalog.contains(dependency) {
            return Err(Better11Error::MissingDependency {
                app_id: app_id.to_string(),
                dependency: dependency.clone(),
            });
        }
        visit(ctx, dependency)?;
    }
    ctx.path.pop();

    ctx.emitted.insert(app_id.to_string());
    ctx.order.push(app_id.to_string());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::{AppMetadata, InstallerType};

    const DIGEST: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    fn create_test_app(id: &str, deps: &[&str]) -> AppMetadata {
        AppMetadata::new(id, "1.0", InstallerType::Exe, format!("{id}.exe"), DIGEST)
            .with_dependencies(deps.iter().copied())
    }

    fn catalog(apps: Vec<AppMetadata>) -> AppCatalog {
        AppCatalog::new(apps, "/catalog").expect("valid catalog")
    }

    #[test]
    fn test_plan_single_app() {
        let catalog = catalog(vec![create_test_app("a", &[])]);
        let plan = build_plan(&catalog, "a").expect("plan should build");
        assert_eq!(plan.ids(), ["a"]);
    }

    #[test]
    fn test_plan_transitive_chain() {
        let catalog = catalog(vec![
            create_test_app("a", &["b"]),
            create_test_app("b", &["c"]),
            create_test_app("c", &[]),
        ]);

        let plan = build_plan(&catalog, "a").expect("plan should build");
        assert_eq!(plan.ids(), ["c", "b", "a"]);
    }

    #[test]
    fn test_plan_siblings_keep_declared_order() {
        let catalog = catalog(vec![
            create_test_app("root", &["zeta", "alpha", "mid"]),
            create_test_app("alpha", &[]),
            create_test_app("mid", &[]),
            create_test_app("zeta", &[]),
        ]);

        let plan = build_plan(&catalog, "root").expect("plan should build");
        assert_eq!(plan.ids(), ["zeta", "alpha", "mid", "root"]);
    }

    #[test]
    fn test_plan_diamond_emits_shared_dependency_once() {
        let catalog = catalog(vec![
            create_test_app("app", &["left", "right"]),
            create_test_app("left", &["base"]),
            create_test_app("right", &["base"]),
            create_test_app("base", &[]),
        ]);

        let plan = build_plan(&catalog, "app").expect("plan should build");
        assert_eq!(plan.ids(), ["base", "left", "right", "app"]);
    }

    #[test]
    fn test_plan_cycle_detection() {
        let catalog = catalog(vec![
            create_test_app("a", &["b"]),
            create_test_app("b", &["a"]),
        ]);

        let err = build_plan(&catalog, "a").unwrap_err();
        match err {
            Better11Error::DependencyCycle { chain } => assert_eq!(chain, "a -> b -> a"),
            other => panic!("Expected DependencyCycle, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_self_dependency_is_cycle() {
        let catalog = catalog(vec![create_test_app("a", &["a"])]);
        let err = build_plan(&catalog, "a").unwrap_err();
        assert!(matches!(err, Better11Error::DependencyCycle { .. }));
    }

    #[test]
    fn test_plan_cycle_below_root_reports_only_cycle() {
        let catalog = catalog(vec![
            create_test_app("root", &["x"]),
            create_test_app("x", &["y"]),
            create_test_app("y", &["x"]),
        ]);

        let err = build_plan(&catalog, "root").unwrap_err();
        assert!(matches!(err, Better11Error::DependencyCycle { ref chain } if chain == "x -> y -> x"));
    }

    #[test]
    fn test_plan_missing_dependency() {
        let catalog = catalog(vec![create_test_app("a", &["ghost"])]);

        let err = build_plan(&catalog, "a").unwrap_err();
        match err {
            Better11Error::MissingDependency { app_id, dependency } => {
                assert_eq!(app_id, "a");
                assert_eq!(dependency, "ghost");
            }
            other => panic!("Expected MissingDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_plan_unknown_root() {
        let catalog = catalog(vec![create_test_app("a", &[])]);
        let err = build_plan(&catalog, "nope").unwrap_err();
        assert!(matches!(err, Better11Error::AppNotFound { .. }));
    }

    #[test]
    fn test_plan_ignores_unrelated_apps() {
        let catalog = catalog(vec![
            create_test_app("a", &[]),
            create_test_app("b", &["a"]),
            create_test_app("unrelated", &["missing"]),
        ]);

        let plan = build_plan(&catalog, "b").expect("plan should build");
        assert_eq!(plan.ids(), ["a", "b"]);
    }
}
