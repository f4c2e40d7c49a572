//! Czech numeral spelling.

pub mod agreement;
pub mod fraction;
pub mod lexicon;
pub mod magnitude;

pub use agreement::{AgreementTable, agreement, bucket};
pub use fraction::spell_fraction;
pub use magnitude::{Mode, spell, spell_magnitude};
