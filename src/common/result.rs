use crate::common::error::InstallerError;

/// インストーラー全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use bild_installer::common::result::InstallerResult;
/// use bild_installer::common::error::InstallerError;
///
/// fn example_function() -> InstallerResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> InstallerResult<()> {
///     Err(InstallerError::incorrect_file())
/// }
///
/// assert!(example_function().is_ok());
/// assert_eq!(
///     example_with_error().unwrap_err().to_string(),
///     "File is not correct!!!"
/// );
/// ```
pub type InstallerResult<T> = Result<T, InstallerError>;
