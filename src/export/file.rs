//! File saving functionality for exported canvas images.

use super::types::ExportError;
use crate::config::ExportConfig;
use crate::draw::PixelBuffer;
use chrono::Local;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file saving.
#[derive(Debug, Clone)]
pub struct FileSaveConfig {
    /// Directory to save images to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl From<&ExportConfig> for FileSaveConfig {
    fn from(config: &ExportConfig) -> Self {
        Self {
            save_directory: expand_tilde(&config.save_directory),
            filename_template: config.filename_template.clone(),
            format: config.format.to_ascii_lowercase(),
        }
    }
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
///
/// Fails with [`ExportError::InvalidTemplate`] when the template contains a
/// specifier chrono cannot format.
pub fn generate_filename(template: &str, format: &str) -> Result<String, ExportError> {
    let now = Local::now();
    let mut filename = String::new();
    write!(filename, "{}.{}", now.format(template), format)
        .map_err(|_| ExportError::InvalidTemplate(template.to_string()))?;
    Ok(filename)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path to the directory.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Returns `path` with a `.png` extension appended unless it already has one.
pub fn with_png_extension(path: &Path) -> PathBuf {
    let has_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if has_png {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".png");
    PathBuf::from(name)
}

/// Encodes `buffer` as PNG bytes.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, ExportError> {
    let surface = buffer.to_surface()?;
    let mut bytes = Vec::new();
    surface.write_to_png(&mut bytes)?;
    Ok(bytes)
}

/// Saves `buffer` under a timestamped name in the configured export directory.
///
/// Returns the path of the written file.
pub fn save_png(buffer: &PixelBuffer, config: &ExportConfig) -> Result<PathBuf, ExportError> {
    save_to_directory(buffer, &FileSaveConfig::from(config))
}

/// Saves `buffer` using an already resolved [`FileSaveConfig`].
pub fn save_to_directory(
    buffer: &PixelBuffer,
    config: &FileSaveConfig,
) -> Result<PathBuf, ExportError> {
    if config.format != "png" {
        return Err(ExportError::UnsupportedFormat(config.format.clone()));
    }

    let filename = generate_filename(&config.filename_template, &config.format)?;
    let directory = ensure_directory_exists(&config.save_directory)?;
    save_png_to(buffer, &directory.join(filename))
}

/// Saves `buffer` to `path`, appending `.png` when the extension is missing.
///
/// Returns the path of the written file.
pub fn save_png_to(buffer: &PixelBuffer, path: &Path) -> Result<PathBuf, ExportError> {
    let file_path = with_png_extension(path);
    let image_data = encode_png(buffer)?;

    log::info!(
        "Saving image to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, &image_data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    // User read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    log::info!("Image saved successfully: {}", file_path.display());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_buffer(width: i32, height: i32) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            stride: width * 4,
            data: vec![255; (width * height * 4) as usize],
        }
    }

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("pen_%Y%m%d", "png").unwrap();
        assert!(filename.starts_with("pen_"));
        assert!(filename.ends_with(".png"));
        assert_eq!(filename.len(), "pen_YYYYMMDD.png".len());
    }

    #[test]
    fn test_invalid_template_is_an_error() {
        assert!(matches!(
            generate_filename("pen_%Q", "png"),
            Err(ExportError::InvalidTemplate(template)) if template == "pen_%Q"
        ));
    }

    #[test]
    fn test_save_with_invalid_template_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileSaveConfig {
            save_directory: dir.path().join("nested"),
            filename_template: "pen_%Q".to_string(),
            format: "png".to_string(),
        };
        assert!(matches!(
            save_to_directory(&white_buffer(1, 1), &config),
            Err(ExportError::InvalidTemplate(_))
        ));
        assert!(!dir.path().join("nested").exists());
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_png_extension_appended_once() {
        assert_eq!(
            with_png_extension(Path::new("/tmp/drawing")),
            PathBuf::from("/tmp/drawing.png")
        );
        assert_eq!(
            with_png_extension(Path::new("/tmp/drawing.PNG")),
            PathBuf::from("/tmp/drawing.PNG")
        );
        assert_eq!(
            with_png_extension(Path::new("/tmp/drawing.jpg")),
            PathBuf::from("/tmp/drawing.jpg.png")
        );
    }

    #[test]
    fn test_save_png_to_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let written = save_png_to(&white_buffer(4, 3), &dir.path().join("out")).unwrap();

        assert_eq!(written, dir.path().join("out.png"));
        let bytes = fs::read(&written).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&written).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_save_png_creates_directory_from_template() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            save_directory: dir.path().join("nested").to_string_lossy().into_owned(),
            filename_template: "frame".to_string(),
            format: "png".to_string(),
        };

        let written = save_png(&white_buffer(2, 2), &config).unwrap();
        assert_eq!(written.file_name().unwrap(), "frame.png");
        assert!(written.exists());
    }

    #[test]
    fn test_unsupported_format_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileSaveConfig {
            save_directory: dir.path().to_path_buf(),
            filename_template: "x".to_string(),
            format: "bmp".to_string(),
        };
        assert!(matches!(
            save_to_directory(&white_buffer(1, 1), &config),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }
}
