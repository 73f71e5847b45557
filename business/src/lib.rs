pub mod application {
    pub mod category {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod data_error {
        pub mod translator;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod publish;
        pub mod update;
    }
}

pub mod domain {
    pub mod entity;
    pub mod errors;
    pub mod logger;
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod data_error {
        pub mod model;
        pub mod services;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod publish;
            pub mod update;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support;
