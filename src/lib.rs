pub mod shared {
    pub mod infrastructure {
        pub mod payload;
        pub mod query_string;
    }
}

pub mod modules {
    pub mod posts {
        pub mod core {
            pub mod id_policy;
            pub mod ordering;
            pub mod post;
            pub mod search;
            pub mod seed;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod list_posts {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod search_posts {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_post {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_post {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_post {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_error;
            }
            pub mod outbound {
                pub mod post_repository;
                pub mod post_repository_in_memory;
            }
        }
    }
}

pub mod shell;
