pub mod wp_server;
