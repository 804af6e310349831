use crate::application::dto::{BuildOrderRequest, BuildOrderResponse};
use crate::build_order::domain::{DependencyTree, Inventory};
use crate::build_order::services::{IgnoreList, OutputParser, Resolver, TreeBuilder};
use crate::ports::outbound::{DependencySource, PackageListReader, ProgressReporter};
use crate::shared::Result;
use std::collections::{BTreeMap, BTreeSet};

/// Inventory plus the canonical names and failed inputs gathered with it
type CollectedInventory = (Inventory, Vec<String>, Vec<String>);

/// GenerateBuildOrderUseCase - Core use case for build order generation
///
/// Collects dependency reports for every listed package, merges them into
/// one inventory, then builds and flattens a tree per top-level package.
///
/// # Type Parameters
/// * `PLR` - PackageListReader implementation
/// * `DS` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateBuildOrderUseCase<PLR, DS, PR> {
    package_list_reader: PLR,
    dependency_source: DS,
    progress_reporter: PR,
}

impl<PLR, DS, PR> GenerateBuildOrderUseCase<PLR, DS, PR>
where
    PLR: PackageListReader,
    DS: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new GenerateBuildOrderUseCase with injected dependencies
    pub fn new(package_list_reader: PLR, dependency_source: DS, progress_reporter: PR) -> Self {
        Self {
            package_list_reader,
            dependency_source,
            progress_reporter,
        }
    }

    /// Executes the build order use case
    ///
    /// # Errors
    /// Only an unreadable package list or an invalid ignore pattern fails the
    /// run. Tool failures and unparseable lines are reported as warnings.
    pub fn execute(&self, request: BuildOrderRequest) -> Result<BuildOrderResponse> {
        let ignore_list = IgnoreList::from_config(
            request.include_default_ignores,
            request.ignore_patterns.clone(),
        )?;
        let patterns = ignore_list.patterns();
        if !patterns.is_empty() {
            self.progress_reporter
                .report(&format!("🚫 Not expanding: {}", patterns.join(", ")));
        }

        // Step 1: Read the package list
        let packages = self.read_and_report_package_list(&request)?;

        // Step 2: Query the tool per package and merge into the inventory
        let (inventory, top_level, skipped) = self.collect_inventory(&packages);

        // Step 3: Build one tree per top-level package
        let trees = self.build_trees(&inventory, &ignore_list, &top_level);

        // Step 4: Flatten every tree
        let resolved = Resolver::resolve(&trees);

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved build order for {} top-level package(s)",
            resolved.len()
        ));

        Ok(BuildOrderResponse::new(
            inventory, top_level, trees, resolved, skipped,
        ))
    }

    fn read_and_report_package_list(&self, request: &BuildOrderRequest) -> Result<Vec<String>> {
        self.progress_reporter.report(&format!(
            "📖 Loading package list from: {}",
            request.package_list_path.display()
        ));

        let packages = self
            .package_list_reader
            .read_package_list(&request.package_list_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", packages.len()));

        Ok(packages)
    }

    /// Runs the dependency tool once per package
    ///
    /// A failing package is warned about and contributes nothing. The
    /// top-level set is the canonical name reported by each successful call.
    fn collect_inventory(&self, packages: &[String]) -> CollectedInventory {
        self.progress_reporter.report(&format!(
            "🔍 Collecting dependencies with '{}'...",
            self.dependency_source.describe()
        ));

        let mut inventory = Inventory::new();
        let mut top_level = BTreeSet::new();
        let mut skipped = Vec::new();
        let total = packages.len();

        for (index, package) in packages.iter().enumerate() {
            self.progress_reporter
                .report_progress(index, total, Some(package.as_str()));

            let lines = match self.dependency_source.fetch_dependencies(package) {
                Ok(lines) => lines,
                Err(e) => {
                    self.progress_reporter
                        .report_warning(&format!("Skipping '{}': {:#}", package, e));
                    skipped.push(package.clone());
                    continue;
                }
            };

            let parsed = OutputParser::parse(&lines);
            for warning in &parsed.warnings {
                self.progress_reporter.report_warning(&format!(
                    "Skipped unparseable line in output for '{}': {}",
                    package, warning
                ));
            }

            if let Some(name) = parsed.canonical_name {
                top_level.insert(name);
            }
            inventory.merge(parsed.records);
        }
        self.progress_reporter
            .report_progress(total, total, Some("done"));

        self.progress_reporter.report(&format!(
            "📦 Inventory holds {} package(s)",
            inventory.len()
        ));

        (inventory, top_level.into_iter().collect(), skipped)
    }

    fn build_trees(
        &self,
        inventory: &Inventory,
        ignore_list: &IgnoreList,
        top_level: &[String],
    ) -> BTreeMap<String, DependencyTree> {
        self.progress_reporter.report(&format!(
            "🌳 Building dependency trees for {} package(s)...",
            top_level.len()
        ));

        let trees = TreeBuilder::new(inventory, ignore_list).build_trees(top_level);

        for tree in trees.values() {
            for name in tree.truncated() {
                self.progress_reporter.report_warning(&format!(
                    "Dependency tree of '{}' truncated at '{}': maximum depth reached",
                    tree.root(),
                    name
                ));
            }
        }

        trees
    }
}
