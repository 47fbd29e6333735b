// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Backend synchronization: wire DTOs and the HTTP client.

pub mod api;
pub mod client;
