pub mod config;

pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod notice;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod identity;
        pub mod record_store;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod reconciler;
            pub mod record;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod attendance_store;
                pub mod attendance_store_in_memory;
                pub mod attendance_store_postgrest;
            }
        }
        pub mod use_cases {
            pub mod toggle_attendance {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod query_attendance {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod track_session {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod time_entries {
        pub mod core {
            pub mod entry;
            pub mod ledger;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod time_entry_store;
                pub mod time_entry_store_in_memory;
                pub mod time_entry_store_postgrest;
            }
        }
        pub mod use_cases {
            pub mod edit_ledger {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod monthly_total {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
