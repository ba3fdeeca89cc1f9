use crate::config::types::{HarnessError, Result};
use crate::lang::adapter::ToolchainAdapter;
use crate::lang::{c::CAdapter, cpp::CppAdapter, java::JavaAdapter, python::PythonAdapter};

/// Normalize common aliases to the canonical catalog tag.
pub fn canonical_tag(language: &str) -> Result<&'static str> {
    match language.to_lowercase().as_str() {
        "c" => Ok("c"),
        "cpp" | "c++" | "cxx" | "cc" => Ok("cpp"),
        "java" => Ok("java"),
        "python" | "py" => Ok("python"),
        other => Err(HarnessError::UnsupportedLanguage(other.to_string())),
    }
}

pub fn adapter_for(language: &str) -> Result<Box<dyn ToolchainAdapter>> {
    match canonical_tag(language)? {
        "c" => Ok(Box::new(CAdapter)),
        "cpp" => Ok(Box::new(CppAdapter)),
        "java" => Ok(Box::new(JavaAdapter)),
        "python" => Ok(Box::new(PythonAdapter)),
        other => Err(HarnessError::UnsupportedLanguage(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::catalog;

    #[test]
    fn test_aliases_normalize() {
        assert_eq!(canonical_tag("py").unwrap(), "python");
        assert_eq!(canonical_tag("C++").unwrap(), "cpp");
        assert_eq!(canonical_tag("cxx").unwrap(), "cpp");
        assert_eq!(canonical_tag("C").unwrap(), "c");
        assert!(canonical_tag("fortran").is_err());
    }

    #[test]
    fn test_every_catalog_probe_has_an_adapter() {
        for tag in catalog::languages() {
            let adapter = adapter_for(tag).unwrap();
            assert_eq!(adapter.language(), tag);
        }
    }

    #[test]
    fn test_adapter_requirements_nonempty() {
        for tag in catalog::languages() {
            assert!(!adapter_for(tag).unwrap().requirements().is_empty());
        }
    }
}
