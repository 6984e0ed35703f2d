macro_rules! editor_command_prefix {
    () => ({
        use std::io::Write;
        print!("Problem command> ");
        let _ = std::io::stdout().flush();
    });
}

/// Message printed on its own line, apart from the prompt echo.
macro_rules! editor_print {
    ($($arg:tt)*) => ({
        println!();
        println!($($arg)*);
    })
}
