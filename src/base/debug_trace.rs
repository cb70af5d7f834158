use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "debug_trace")] {
        macro_rules! trace {
            ( @scan $ch:expr, $valid_symbols:expr, $depth:expr ) => {
                println!(
                    "@scan: {:?}, valid: {:?}, stack depth: {}",
                    $ch, $valid_symbols, $depth
                );
            };

            ( @token $kind:expr ) => {
                println!("@token: {:?}", $kind);
            };

            ( @stack $op:literal, $tag:expr ) => {
                println!("@stack {}: {:?}", $op, $tag);
            };

            ( @state $($args:expr),+ ) => {
                println!("@state: {}", format_args!($($args),+));
            };
        }
    } else {
        macro_rules! trace {
            ( $($anything:tt)* ) => {};
        }
    }
}
