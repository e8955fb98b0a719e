//! Bracketed text rendering.
//!
//! Every container renders as `[ e1, e2, ..., en ]`: a space after the
//! opening bracket, `", "` between elements and a space before the closing
//! bracket. An empty container renders as `[ ]`.

use std::fmt::{self, Display, Write};

/// Writes `elements` in bracketed form to `writer`.
///
/// Works with any [`fmt::Write`], so `Display` impls pass their formatter and
/// [`render`] passes a `String`.
///
/// # Errors
///
/// Propagates any error returned by `writer`.
pub fn write_bracketed<'a, T, W, I>(writer: &mut W, elements: I) -> fmt::Result
where
    T: Display + ?Sized + 'a,
    W: Write,
    I: IntoIterator<Item = &'a T>,
{
    writer.write_char('[')?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            writer.write_char(',')?;
        }
        write!(writer, " {element}")?;
    }
    writer.write_str(" ]")
}

/// Renders `elements` in bracketed form.
///
/// # Examples
///
/// ```rust
/// use slicelib::slicer::render::render;
///
/// assert_eq!(render(&[1, 2, 3]), "[ 1, 2, 3 ]");
/// assert_eq!(render::<i32, _>(&[]), "[ ]");
/// ```
pub fn render<'a, T, I>(elements: I) -> String
where
    T: Display + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = write_bracketed(&mut text, elements);
    text
}
