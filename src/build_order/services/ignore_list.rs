use crate::shared::Result;

/// Packages present on practically every system; expanding them only adds noise
pub const DEFAULT_IGNORED_PACKAGES: [&str; 2] = ["debconf", "perl-base"];

/// Maximum number of ignore patterns
const MAX_IGNORE_PATTERNS: usize = 256;

/// Maximum length of a single ignore pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// IgnoreList - packages that are listed in a tree but never expanded
///
/// Patterns may use '*' to match zero or more characters. Matching is
/// case-sensitive and anchored at both ends. The empty name (a blank line in
/// the package list) is always ignored.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreList {
    /// Creates an ignore list from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns
    /// - Invalid pattern format (empty, too long, bad characters, wildcards only)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_IGNORE_PATTERNS {
            anyhow::bail!(
                "Too many ignore patterns: {} (maximum: {})",
                patterns.len(),
                MAX_IGNORE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(IgnorePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// The built-in list: `debconf` and `perl-base`
    pub fn with_defaults() -> Self {
        Self {
            patterns: DEFAULT_IGNORED_PACKAGES
                .iter()
                .map(|name| IgnorePattern {
                    original: name.to_string(),
                    matcher: compile_pattern(name),
                })
                .collect(),
        }
    }

    /// Built-in defaults (when `include_defaults`) followed by `extra` patterns
    pub fn from_config(include_defaults: bool, extra: Vec<String>) -> Result<Self> {
        let mut list = if include_defaults {
            Self::with_defaults()
        } else {
            Self {
                patterns: Vec::new(),
            }
        };
        let extra = Self::new(extra)?;
        for pattern in extra.patterns {
            if !list.patterns.iter().any(|p| p.original == pattern.original) {
                list.patterns.push(pattern);
            }
        }
        Ok(list)
    }

    /// Checks whether a package must not be expanded
    pub fn matches(&self, package_name: &str) -> bool {
        package_name.is_empty() || self.patterns.iter().any(|p| p.matcher.matches(package_name))
    }

    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.original.as_str()).collect()
    }
}

impl Default for IgnoreList {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[derive(Debug, Clone)]
struct IgnorePattern {
    original: String,
    matcher: PatternMatcher,
}

impl IgnorePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = compile_pattern(&pattern);
        Ok(Self {
            original: pattern,
            matcher,
        })
    }
}

#[derive(Debug, Clone)]
enum PatternMatcher {
    /// "libc6"
    Exact(String),
    /// "lib*", "*-dev", "lib*-dev", "*python*"
    Glob {
        head: String,
        middle: Vec<String>,
        tail: String,
    },
}

impl PatternMatcher {
    fn matches(&self, package_name: &str) -> bool {
        match self {
            PatternMatcher::Exact(name) => package_name == name,
            PatternMatcher::Glob { head, middle, tail } => {
                if package_name.len() < head.len() + tail.len()
                    || !package_name.starts_with(head.as_str())
                    || !package_name.ends_with(tail.as_str())
                {
                    return false;
                }
                let mut rest = &package_name[head.len()..package_name.len() - tail.len()];
                for part in middle {
                    match rest.find(part.as_str()) {
                        Some(pos) => rest = &rest[pos + part.len()..],
                        None => return false,
                    }
                }
                true
            }
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Ignore pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Ignore pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Ignore pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, '-', '+', '.', ':', '_' and '*' are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!("Ignore pattern cannot contain only wildcards: '{}'", pattern);
    }

    Ok(())
}

/// Debian package names use lowercase alphanumerics, '+', '-' and '.';
/// ':' allows architecture qualifiers such as `libc6:amd64`.
fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '+' | '.' | ':' | '_' | '*')
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    if !pattern.contains('*') {
        return PatternMatcher::Exact(pattern.to_string());
    }

    let mut parts: Vec<&str> = pattern.split('*').collect();
    // split on at least one '*' yields at least two parts
    let tail = parts.pop().unwrap_or_default().to_string();
    let head = if parts.is_empty() {
        String::new()
    } else {
        parts.remove(0).to_string()
    };
    let middle = parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();

    PatternMatcher::Glob { head, middle, tail }
}
