//! Named-import extraction from source text
//!
//! This is a narrow textual matcher, not a parser. It recognizes only the
//! single-line form `import { A, B as C } from 'path';`. Multi-line imports,
//! default imports, and namespace imports are not recognized; that is an
//! accepted limitation inherited from the original tool, kept for
//! compatibility.

use once_cell::sync::Lazy;
use regex::Regex;

/// Extensions scanned for import statements
pub const SOURCE_EXTENSIONS: [&str; 2] = [".ts", ".tsx"];

/// Single-line named-import statement shape
static IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"import \{([^;\n]+)\} from '([^'\n]+)';").expect("import pattern is valid")
});

/// One matched import statement: the module path as written, plus the raw
/// symbol names from the clause (aliases already stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub module_path: String,
    pub symbols: Vec<String>,
}

/// Whether a file extension (with leading dot) is scanned by the extractor.
pub fn is_source_extension(ext: &str) -> bool {
    SOURCE_EXTENSIONS.contains(&ext)
}

/// Extract every recognized import statement from `source`.
///
/// Pure transform over the text; reading the file is the caller's job.
pub fn extract_imports(source: &str) -> Vec<ImportStatement> {
    IMPORT_RE
        .captures_iter(source)
        .map(|captures| {
            let symbols = captures[1]
                .split(',')
                .map(strip_alias)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect();

            ImportStatement {
                module_path: captures[2].to_owned(),
                symbols,
            }
        })
        .collect()
}

/// Trim a symbol clause item and drop any `as <alias>` suffix, keeping the
/// original exported name.
fn strip_alias(item: &str) -> &str {
    let item = item.trim();
    match item.find(" as ") {
        Some(pos) => item[..pos].trim_end(),
        None => item,
    }
}
