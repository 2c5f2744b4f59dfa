//! Curly-brace matching on top of [`BoundedStack`].

use vc_core::{ContainerError, ContainerResult};

use crate::BoundedStack;

/// Deepest `{` nesting [`braces_balanced`] can track.
pub const MAX_NESTING: usize = 500;

/// Report whether every `}` in `text` closes an earlier `{`.
///
/// Characters other than `{` and `}` are ignored. Only a stray `}` makes
/// the text unbalanced; `{` left open at the end does not.
///
/// # Errors
///
/// `CapacityExceeded` when more than [`MAX_NESTING`] braces are open at once.
///
/// # Example
///
/// ```rust
/// use vc_containers::braces_balanced;
///
/// assert_eq!(braces_balanced("fn f() { if x { y } }"), Ok(true));
/// assert_eq!(braces_balanced("}{"), Ok(false));
/// ```
pub fn braces_balanced(text: &str) -> ContainerResult<bool> {
    let mut open: BoundedStack<char> = BoundedStack::with_capacity(MAX_NESTING);

    for c in text.chars() {
        match c {
            '{' => open.push(c)?,
            '}' => match open.pop() {
                Ok('{') => {}
                Ok(_) | Err(ContainerError::Empty) => return Ok(false),
                Err(e) => return Err(e),
            },
            _ => {}
        }
    }
    Ok(true)
}
