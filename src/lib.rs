pub mod shared {
    pub mod core {
        pub mod aggregation;
    }
    pub mod application {
        pub mod errors;
    }
    pub mod inbound {
        pub mod actor;
        pub mod responses;
    }
}

pub mod modules {
    pub mod travel {
        pub mod core {
            pub mod catalog;
            pub mod expense;
            pub mod fuel;
            pub mod ports;
            pub mod trip;
        }
        pub mod use_cases {
            pub mod create_trip {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_trip {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_trip {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_trips {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod record_expense {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_expense {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_expense {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_expenses {
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_catalog {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory_store;
            }
        }
    }
    pub mod reports {
        pub mod core {
            pub mod catalog_snapshot;
            pub mod errors;
            pub mod overall_summary;
            pub mod trip_summary;
        }
        pub mod use_cases {
            pub mod get_trip_summary {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_overall_summary {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
