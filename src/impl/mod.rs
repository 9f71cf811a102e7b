// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod sales_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod sale_row_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod sales_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod reports;
        pub(crate) mod sale;
    }
    pub(crate) mod logic {
        pub(crate) mod sales_aggregator;
        pub(crate) mod sales_store;
    }
    pub(crate) mod repositories {
        pub(crate) mod sales_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod sales_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod console_printer;
    pub(crate) mod session;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::reports::*;
        pub use crate::domain::entities::sale::*;
    }

    pub use crate::presentation::session::Session;
}
