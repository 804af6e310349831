use crate::ports::outbound::DependencySource;
use crate::shared::error::BuildOrderError;
use crate::shared::Result;
use anyhow::Context;
use std::process::Command;

/// Tool invoked when none is configured
pub const DEFAULT_TOOL: &str = "apt-rdepends";

/// CommandDependencySource adapter running `<tool> <package>` and capturing stdout
///
/// The call is synchronous with no timeout. A launch failure or a non-zero
/// exit status is returned as an error for the caller to skip.
#[derive(Debug, Clone)]
pub struct CommandDependencySource {
    program: String,
    args: Vec<String>,
}

impl CommandDependencySource {
    /// Creates a source from a command line such as `apt-rdepends --build-depends`
    ///
    /// The first whitespace-separated word is the program, the rest are
    /// passed before the package name.
    pub fn new(command_line: &str) -> Result<Self> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words.next().ok_or_else(|| BuildOrderError::Validation {
            message: "Dependency tool command cannot be empty".to_string(),
        })?;

        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn failure(&self, package_name: &str, details: String) -> anyhow::Error {
        BuildOrderError::ToolFailure {
            tool: self.program.clone(),
            package: package_name.to_string(),
            details,
        }
        .into()
    }
}

impl Default for CommandDependencySource {
    fn default() -> Self {
        Self {
            program: DEFAULT_TOOL.to_string(),
            args: Vec::new(),
        }
    }
}

impl DependencySource for CommandDependencySource {
    fn fetch_dependencies(&self, package_name: &str) -> Result<Vec<String>> {
        // The tool would parse such a name as one of its own options.
        if package_name.starts_with('-') {
            return Err(BuildOrderError::InvalidPackageName {
                name: package_name.to_string(),
                reason: "package names cannot start with '-'".to_string(),
            }
            .into());
        }

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(package_name)
            .output()
            .with_context(|| format!("Failed to launch '{}'", self.program))
            .map_err(|e| self.failure(package_name, format!("{:#}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let details = match stderr.trim() {
                "" => output.status.to_string(),
                message => format!("{}: {}", output.status, message),
            };
            return Err(self.failure(package_name, details));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
