//! University logo lookup.
//!
//! Logos live in a directory as `<university>.png`. The dashboard never draws
//! them; it shows where the logo would come from, falling back to a shared
//! placeholder image when no file exists.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Image used when a university has no logo file.
pub const PLACEHOLDER_LOGO_URL: &str = "https://cdn-icons-png.flaticon.com/512/807/807262.png";

const LOGO_EXTENSION: &str = "png";

/// Where a university's logo comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logo {
    /// A logo file on disk.
    File(Utf8PathBuf),
    /// The shared placeholder image.
    Placeholder(&'static str),
}

impl Logo {
    /// Path or URL for display.
    #[must_use]
    pub fn reference(&self) -> &str {
        match self {
            Self::File(path) => path.as_str(),
            Self::Placeholder(url) => url,
        }
    }

    /// Returns true when a logo file was found.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

/// Resolves university names to logo files within one directory.
#[derive(Debug)]
pub struct LogoResolver {
    root: Utf8PathBuf,
    dir: Option<Dir>,
}

impl LogoResolver {
    /// Opens `root` for lookups; a missing directory resolves every name to
    /// the placeholder.
    #[must_use]
    pub fn new(root: impl AsRef<Utf8Path>) -> Self {
        let path = root.as_ref().to_path_buf();
        let dir = match Dir::open_ambient_dir(&path, ambient_authority()) {
            Ok(dir) => Some(dir),
            Err(error) => {
                tracing::debug!(dir = %path, %error, "logo directory unavailable");
                None
            }
        };
        Self { root: path, dir }
    }

    /// Looks up `<root>/<university>.png`.
    #[must_use]
    pub fn resolve(&self, university: &str) -> Logo {
        let Some(file_name) = logo_file_name(university) else {
            return Logo::Placeholder(PLACEHOLDER_LOGO_URL);
        };

        let found = self
            .dir
            .as_ref()
            .is_some_and(|dir| dir.is_file(&file_name));
        if found {
            Logo::File(self.root.join(file_name))
        } else {
            Logo::Placeholder(PLACEHOLDER_LOGO_URL)
        }
    }
}

fn logo_file_name(university: &str) -> Option<String> {
    let name = university.trim();
    let unsafe_name = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control);
    (!unsafe_name).then(|| format!("{name}.{LOGO_EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use super::*;

    /// Result type used by logo tests.
    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[fixture]
    fn logo_dir() -> TempDir {
        TempDir::new().expect("temp dir should be created")
    }

    fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("temp path should be UTF-8")
    }

    #[rstest]
    fn resolves_existing_logo_file(logo_dir: TempDir) -> TestResult {
        let root = utf8_root(&logo_dir);
        std::fs::write(root.join("Yonsei.png"), b"png")?;

        let logo = LogoResolver::new(&root).resolve("Yonsei");

        assert_eq!(logo, Logo::File(root.join("Yonsei.png")));
        assert!(logo.is_file());
        Ok(())
    }

    #[rstest]
    fn falls_back_to_placeholder_when_missing(logo_dir: TempDir) {
        let logo = LogoResolver::new(utf8_root(&logo_dir)).resolve("Korea");

        assert_eq!(logo, Logo::Placeholder(PLACEHOLDER_LOGO_URL));
        assert_eq!(logo.reference(), PLACEHOLDER_LOGO_URL);
    }

    #[rstest]
    fn missing_directory_uses_placeholder() {
        let resolver = LogoResolver::new("/nonexistent/cutline/logos");

        assert!(!resolver.resolve("Yonsei").is_file());
    }

    #[rstest]
    #[case::traversal("../secret")]
    #[case::separator("a/b")]
    #[case::hidden(".hidden")]
    #[case::blank("  ")]
    fn rejects_names_that_leave_the_directory(logo_dir: TempDir, #[case] name: &str) {
        let resolver = LogoResolver::new(utf8_root(&logo_dir));

        assert_eq!(resolver.resolve(name), Logo::Placeholder(PLACEHOLDER_LOGO_URL));
    }
}
