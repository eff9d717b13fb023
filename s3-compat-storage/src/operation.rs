/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for single object metadata lookup
pub mod info;

/// Types for listing a page of keys
pub mod list;

/// Types for single object upload operation
pub mod upload;

/// Types for single object download operation
pub mod download;

/// Types for single object deletion
pub mod delete;

/// Types for presigned URL issuance
pub mod presign;
