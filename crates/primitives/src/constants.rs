/// Version byte prepended to an address before base58 encoding.
pub const ADDRESS_VERSION: u8 = 0x17;

/// Length of a decoded base58 address: version + 20 bytes + 4 byte checksum.
pub const BASE58_ADDRESS_LENGTH: usize = 25;
