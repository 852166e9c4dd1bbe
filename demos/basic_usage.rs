use uds_errors::{
    define_error_infos, make_unrecoverable, register_error_block, string_error,
    string_error_name, with_registry, RegistrationLog, ERRBUF_SIZE, UDS_NO_INDEX,
};

const VDO_BLOCK_START: i32 = 2048;
const VDO_BLOCK_END: i32 = VDO_BLOCK_START + 100;

define_error_infos! {
    /// Status codes owned by the VDO layer.
    const VDO_STATUS_INFOS, base = VDO_BLOCK_START => {
        VDO_OUT_OF_RANGE = 0 => "Out of range",
        VDO_REF_COUNT_INVALID = 1 => "Reference count would become invalid",
        VDO_NO_SPACE = 2 => "Out of space",
        VDO_BAD_CONFIGURATION = 3 => "Bad configuration option",
    }
}

fn register(name: &'static str, first: i32, last_reserved: i32) {
    let result = register_error_block(name, first, last_reserved, VDO_STATUS_INFOS);
    let log = RegistrationLog::new(name, first, last_reserved, VDO_STATUS_INFOS.len(), &result);
    println!("   {}", log);
}

fn main() {
    println!("--- Basic Usage Example ---\n");

    // 1. A subsystem claims its block at start-up. The second and third
    //    attempts are rejected and nothing changes.
    println!("1. [REGISTRATION]");
    register("VDO Status", VDO_BLOCK_START, VDO_BLOCK_END);
    register("VDO Status", 9000, 9100);
    register("VDO Shadow", VDO_BLOCK_START + 50, VDO_BLOCK_END + 50);

    // 2. The resulting table, one log line per block.
    println!("\n2. [BLOCK TABLE]");
    let mut summary = String::new();
    if with_registry(|registry| registry.write_summary(&mut summary)).is_ok() {
        for line in summary.lines() {
            println!("   {}", line);
        }
    }

    // 3. Any code can be rendered, whoever owns it.
    println!("\n3. [MESSAGES]");
    let mut buf = [0u8; ERRBUF_SIZE];
    let codes = [
        UDS_NO_INDEX,
        VDO_OUT_OF_RANGE,
        VDO_NO_SPACE,
        VDO_BLOCK_START + 42,
        make_unrecoverable(VDO_REF_COUNT_INVALID),
        28,
        0,
    ];

    for code in codes {
        let message = string_error(code, &mut buf).unwrap_or_default().to_owned();
        let name = string_error_name(code, &mut buf).unwrap_or_default();
        println!("   {:>7}  {:<24} {}", code, name, message);
    }

    // 4. Tiny buffers truncate instead of overflowing.
    println!("\n4. [TRUNCATION]");
    let mut tiny = [0u8; 16];
    println!(
        "   {:?}",
        string_error(VDO_BAD_CONFIGURATION, &mut tiny).unwrap_or_default()
    );
}
