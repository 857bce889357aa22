// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Generic abstractions for the storage layer.
//!
//! Services define a trait with the domain-specific operations on their tables, and every backend
//! of that trait reports failures via `DbError`.  Note that the expected absence of an entity is
//! not necessarily an error: storage operations are free to model it as an `Option` and leave it
//! to the driver to decide whether absence is a problem.

/// Database errors.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DbError {
    /// Indicates a failure processing the data that already exists in the database.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),
}

/// Result type for this module.
pub type DbResult<T> = Result<T, DbError>;

/// Macros to help instantiate tests for multiple storage backends.
#[cfg(any(test, feature = "testutils"))]
pub mod testutils {
    pub use paste::paste;

    /// Instantiates the `module::name` test for the backend configured by `setup`.
    ///
    /// The `extra` metadata parameter can be used to tag the generated tests.
    #[macro_export]
    macro_rules! generate_one_test [
        ( $name:ident, $setup:expr, $module:path $(, #[$extra:meta] )? ) => {
            #[tokio::test]
            $(#[$extra])?
            async fn $name() {
                $crate::db::testutils::paste! {
                    $module :: [< $name >]($setup).await;
                }
            }
        }
    ];

    pub use generate_one_test;

    /// Instantiates a collection of tests for a specific storage backend.
    ///
    /// The backend to run the tests against is determined by the `setup` expression, which needs
    /// to return a freshly-initialized and empty instance of the backend.
    ///
    /// The `extra` metadata parameter can be used to tag the generated tests.
    #[macro_export]
    macro_rules! generate_tests [
        ( #[$extra:meta], $setup:expr, $module:path $(, $name:ident)+ ) => {
            $(
                $crate::db::testutils::generate_one_test!($name, $setup, $module, #[$extra]);
            )+
        };

        ( $setup:expr, $module:path $(, $name:ident)+ ) => {
            $(
                $crate::db::testutils::generate_one_test!($name, $setup, $module);
            )+
        };
    ];

    pub use generate_tests;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrity_error_display() {
        let e = DbError::DataIntegrityError("Cart 2 references unknown item 7".to_owned());
        assert_eq!("Data integrity error: Cart 2 references unknown item 7", e.to_string());
    }

    /// Trivial backend used to exercise the test generation macros.
    struct Counter(u32);

    impl Counter {
        /// Sets up a fresh counter.
        async fn setup() -> Self {
            Self(0)
        }
    }

    /// Test cases instantiated via `generate_tests!`.
    mod cases {
        use super::Counter;

        pub(super) async fn test_starts_at_zero(counter: Counter) {
            assert_eq!(0, counter.0);
        }

        pub(super) async fn test_increments(mut counter: Counter) {
            counter.0 += 1;
            assert_eq!(1, counter.0);
        }
    }

    crate::db::testutils::generate_tests!(
        Counter::setup().await,
        cases,
        test_starts_at_zero,
        test_increments
    );
}
