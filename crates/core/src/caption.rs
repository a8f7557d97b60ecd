//! Caption and title text for documents, tabs, and the recent-document menu.

use std::path::Path;

/// Caption shown for a document with no file name.
pub const UNTITLED: &str = "Untitled";

/// Compute the caption for a document.
///
/// With `path_visible` the full path is shown, home directory abbreviated
/// to `~`. Otherwise only the file name, or "Untitled" when there is none.
/// The sequence number is appended as ` (N)` when it is greater than 1 and
/// the caption would otherwise collide (path hidden or absent).
pub fn caption(path: Option<&Path>, sequence_number: u32, path_visible: bool) -> String {
    let mut caption = match path {
        Some(path) => {
            if path_visible {
                abbreviate_home(path)
            } else {
                match path.file_name().and_then(|n| n.to_str()) {
                    Some(name) => name.to_string(),
                    None => UNTITLED.to_string(),
                }
            }
        }
        None => UNTITLED.to_string(),
    };

    if sequence_number > 1 && (!path_visible || path.is_none()) {
        caption = format!("{} ({})", caption, sequence_number);
    }

    caption
}

/// Menu text for a recent-document entry: `name [~/path/to/name]`.
pub fn recent_entry(path: &Path) -> String {
    let location = format!("[{}]", abbreviate_home(path));
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => format!("{} {}", name, location),
        None => location,
    }
}

/// Display a path with a leading home-directory prefix replaced by `~`.
pub fn abbreviate_home(path: &Path) -> String {
    match dirs::home_dir() {
        Some(home) => abbreviate_home_in(path, &home),
        None => path.display().to_string(),
    }
}

fn abbreviate_home_in(path: &Path, home: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn untitled_without_path() {
        assert_eq!(caption(None, 0, false), "Untitled");
        assert_eq!(caption(None, 1, false), "Untitled");
        assert_eq!(caption(None, 2, false), "Untitled (2)");
        // Path visibility is irrelevant when there is no path.
        assert_eq!(caption(None, 3, true), "Untitled (3)");
    }

    #[test]
    fn file_name_when_path_hidden() {
        let path = PathBuf::from("/data/sheets/budget.fol");
        assert_eq!(caption(Some(&path), 1, false), "budget.fol");
        assert_eq!(caption(Some(&path), 2, false), "budget.fol (2)");
    }

    #[test]
    fn full_path_suppresses_sequence_suffix() {
        // A visible path already disambiguates; no suffix even for N > 1.
        let path = PathBuf::from("/data/sheets/budget.fol");
        assert_eq!(caption(Some(&path), 2, true), "/data/sheets/budget.fol");
    }

    #[test]
    fn home_prefix_abbreviates() {
        let home = PathBuf::from("/home/ada");
        assert_eq!(
            abbreviate_home_in(Path::new("/home/ada/sheets/budget.fol"), &home),
            "~/sheets/budget.fol"
        );
        assert_eq!(abbreviate_home_in(Path::new("/home/ada"), &home), "~");
        assert_eq!(
            abbreviate_home_in(Path::new("/srv/budget.fol"), &home),
            "/srv/budget.fol"
        );
        // "/home/adam" must not match the "/home/ada" prefix.
        assert_eq!(
            abbreviate_home_in(Path::new("/home/adam/budget.fol"), &home),
            "/home/adam/budget.fol"
        );
    }

    #[test]
    fn recent_entry_shows_name_and_location() {
        let path = PathBuf::from("/data/sheets/budget.fol");
        assert_eq!(recent_entry(&path), "budget.fol [/data/sheets/budget.fol]");
    }
}
