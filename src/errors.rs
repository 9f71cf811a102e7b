use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading sales file.");
define_client_error!(WriteError, "Error writing sales file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(
    InvalidMonth,
    "Invalid month: '{value}'. Please enter a number from 1-12.",
    { value: &str }
);

// Console.
define_client_error!(ConsoleError, "Error reading from or writing to the console.");
