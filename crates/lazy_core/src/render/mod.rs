//! Human-readable rendering: `[1 2 3]`, nested lists as `[[1 2] [3]]`.
//!
//! Rendering walks the whole list, so infinite lists must be bounded first.

use std::fmt;

use crate::thunk::Thunk;
use crate::Element;

impl<T: Element + fmt::Display> fmt::Display for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}
