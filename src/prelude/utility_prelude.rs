pub use crate::utility::label_encoding::LabelEncoder;
pub use crate::utility::train_test_split::{ordered_train_test_split, train_test_split};
