// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! 32-bit checksums for build and installation identity.
//!
//! Two polynomials are in use: the installation serial is fingerprinted with
//! CRC-32C (Castagnoli) and rendered as hex, while the version checksum is the
//! plain CRC-32 (IEEE) value.

use crc::{Crc, CRC_32_ISCSI};

const CASTAGNOLI: Crc<u32> = Crc::<u32>::new(&CRC_32_ISCSI);

/// CRC-32C of `data` as 8 lowercase, zero-padded hex characters.
pub fn hex_checksum(data: impl AsRef<[u8]>) -> String {
	format!("{:08x}", CASTAGNOLI.checksum(data.as_ref()))
}

/// CRC-32 (IEEE) of `data`.
pub fn ieee_checksum(data: impl AsRef<[u8]>) -> u32 {
	crc32fast::hash(data.as_ref())
}
