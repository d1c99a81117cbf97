pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod interactions {
        pub mod core {
            pub mod interaction;
            pub mod ports;
            pub mod recipe;
            pub mod shopping_list;
            pub mod subscription;
            pub mod user;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod add_interaction {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod remove_interaction {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod download_shopping_list {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_recipe {
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_recipes {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod short_link {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_recipe {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod subscribe {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod unsubscribe {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_subscriptions {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_types;
            }
            pub mod outbound {
                pub mod interaction_store_in_memory;
                pub mod recipe_catalog_in_memory;
                pub mod seed;
                pub mod subscription_store_in_memory;
                pub mod users_in_memory;
            }
        }
    }
}

pub mod shell;
