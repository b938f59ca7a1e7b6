// SPDX-FileCopyrightText: 2026 StarterKit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end client testing.
//!
//! `TestHarness` wires a [`StarterKitClient`] to a shared [`MockStarterKit`]
//! so tests can drive the client and inspect or mutate contract state.

use std::sync::Arc;

use starterkit_core::{Address, VersionIndex, WebsiteHandle};
use starterkit_plugin::{RevertClassifier, StarterKitClient};

use crate::mock_contract::{MockStarterKit, MockStarterKitBuilder};

/// Account that owns every website the harness registers.
pub const OWNER: Address = Address([0xaa; 20]);

/// Account with no rights on any website.
pub const STRANGER: Address = Address([0xbb; 20]);

/// Address the client targets. The mock ignores it.
pub const PLUGIN_ADDRESS: Address = Address([0xcc; 20]);

/// Website registered with two versions.
pub const WEBSITE: WebsiteHandle = WebsiteHandle(Address([0x11; 20]));

/// Second website registered with one version.
pub const OTHER_WEBSITE: WebsiteHandle = WebsiteHandle(Address([0x22; 20]));

/// Website that is never registered.
pub const UNKNOWN_WEBSITE: WebsiteHandle = WebsiteHandle(Address([0x33; 20]));

/// Builder for test environments.
pub struct TestHarnessBuilder {
    mock: MockStarterKitBuilder,
    classifier: RevertClassifier,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            mock: MockStarterKit::builder()
                .website(WEBSITE, OWNER, 2)
                .website(OTHER_WEBSITE, OWNER, 1)
                .caller(OWNER),
            classifier: RevertClassifier::default(),
        }
    }

    /// Adjust the mock contract before it is built.
    pub fn with_contract(
        mut self,
        configure: impl FnOnce(MockStarterKitBuilder) -> MockStarterKitBuilder,
    ) -> Self {
        self.mock = configure(self.mock);
        self
    }

    /// Use a custom revert classifier.
    pub fn with_classifier(mut self, classifier: RevertClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn build(self) -> TestHarness {
        let contract = Arc::new(self.mock.build());
        let client = StarterKitClient::new(Arc::clone(&contract), PLUGIN_ADDRESS)
            .with_classifier(self.classifier);
        TestHarness { contract, client }
    }
}

/// A client bound to an in-memory contract.
pub struct TestHarness {
    pub contract: Arc<MockStarterKit>,
    pub client: StarterKitClient<Arc<MockStarterKit>>,
}

impl TestHarness {
    /// Start building a harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// A harness with the default websites, acting as [`OWNER`].
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Shorthand for `VersionIndex(n)`.
    pub fn version(n: u64) -> VersionIndex {
        VersionIndex(n)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
