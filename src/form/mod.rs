mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{FormController, Submission, NAME_REQUIRED_MESSAGE};
pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{Field, FieldErrors, FormState};
