//! Resolve command implementation.
//!
//! The `adsh resolve` command shows which registry an identifier belongs to.

use crate::cli::args::ResolveArgs;
use crate::error::{AdshError, Result};
use crate::registry::RegistryCollection;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand<'a> {
    registries: &'a RegistryCollection,
    args: ResolveArgs,
}

impl<'a> ResolveCommand<'a> {
    /// Create a new resolve command.
    pub fn new(registries: &'a RegistryCollection, args: ResolveArgs) -> Self {
        Self { registries, args }
    }
}

impl Command for ResolveCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.registries.resolve(&self.args.identifier) {
            Ok(qualified) => {
                ui.data(&qualified.to_string());
                Ok(CommandResult::success())
            }
            Err(e @ AdshError::AmbiguousIdentifier { .. }) => {
                ui.error(&format!("Error: {}", e));
                if let AdshError::AmbiguousIdentifier { candidates, .. } = &e {
                    for candidate in candidates {
                        ui.data(candidate);
                    }
                }
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{SiteDefinition, StaticRegistry};
    use crate::ui::MockUI;

    fn registries() -> RegistryCollection {
        let mut collection = RegistryCollection::new();
        for alias in ["home", "work"] {
            let mut registry = StaticRegistry::new();
            registry
                .insert("shared", SiteDefinition::new(format!("/srv/{}", alias)))
                .unwrap();
            registry
                .insert(alias, SiteDefinition::new(format!("/srv/{}-only", alias)))
                .unwrap();
            collection.add_registry(registry, Some(alias)).unwrap();
        }
        collection
    }

    fn resolve(identifier: &str, ui: &mut MockUI) -> Result<CommandResult> {
        let registries = registries();
        let args = ResolveArgs {
            identifier: identifier.to_string(),
        };
        ResolveCommand::new(&registries, args).execute(ui)
    }

    #[test]
    fn prints_qualified_identifier() {
        let mut ui = MockUI::new();
        let result = resolve("work", &mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.stdout(), "work/work");
    }

    #[test]
    fn qualified_input_is_echoed() {
        let mut ui = MockUI::new();
        resolve("home/shared", &mut ui).unwrap();
        assert_eq!(ui.stdout(), "home/shared");
    }

    #[test]
    fn ambiguity_lists_candidates() {
        let mut ui = MockUI::new();
        let result = resolve("shared", &mut ui).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.outputs(), &["home/shared", "work/shared"]);
        assert!(ui.has_error("Identifier conflict for shared"));
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let mut ui = MockUI::new();
        let result = resolve("missing", &mut ui);
        assert!(matches!(result, Err(AdshError::UnknownIdentifier { .. })));
    }
}
