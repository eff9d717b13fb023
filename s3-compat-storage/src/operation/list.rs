/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

/// Request type for listing keys
pub use input::{ListInput, ListInputBuilder};
/// Response type for listing keys
pub use output::ListOutput;

use std::sync::Arc;

use crate::error;

/// Operation struct for listing a single page of keys
#[derive(Clone, Default, Debug)]
pub(crate) struct List;

impl List {
    /// Execute a single `List` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ListInput,
    ) -> Result<ListOutput, error::Error> {
        tracing::debug!(
            bucket = input.bucket(),
            prefix = input.prefix(),
            max_keys = input.max_keys(),
            resuming = input.continuation_token().is_some(),
            "listing objects"
        );

        let output = handle.backend.list_objects(&input).await?;

        tracing::debug!(
            keys = output.keys().len(),
            has_more = output.has_more(),
            "list page received"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod test {
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
    use aws_sdk_s3::types::Object;
    use aws_smithy_mocks::{mock, mock_client, RuleMode};

    fn page(keys: &[&str], next_token: Option<&str>) -> ListObjectsV2Output {
        let contents = keys
            .iter()
            .map(|key| Object::builder().key(*key).size(1).build())
            .collect();
        ListObjectsV2Output::builder()
            .set_contents(Some(contents))
            .is_truncated(next_token.is_some())
            .set_next_continuation_token(next_token.map(str::to_owned))
            .build()
    }

    fn storage(client: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder()
            .endpoint("s3.us-west-004.backblazeb2.com")
            .s3_client(client)
            .build()
            .unwrap();
        crate::Client::new(config)
    }

    #[tokio::test]
    async fn test_max_keys_is_clamped() {
        let list = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.max_keys() == Some(1000) && r.prefix() == Some("photos/"))
            .then_output(|| page(&["photos/a.jpg", "photos/b.jpg"], None));
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]);

        let output = storage(client)
            .list()
            .bucket("test-bucket")
            .prefix("photos/")
            .max_keys(5000)
            .send()
            .await
            .unwrap();

        assert_eq!(vec!["photos/a.jpg", "photos/b.jpg"], output.keys());
        assert_eq!(None, output.continuation_token());
        assert!(!output.has_more());
    }

    #[tokio::test]
    async fn test_default_max_keys() {
        let list = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.max_keys() == Some(1000) && r.continuation_token().is_none())
            .then_output(|| page(&[], None));
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]);

        let output = storage(client)
            .list()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();
        assert!(output.keys().is_empty());
        assert_eq!(1, list.num_calls());
    }

    #[tokio::test]
    async fn test_pagination_with_continuation_token() {
        let first = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.max_keys() == Some(2) && r.continuation_token().is_none())
            .then_output(|| page(&["a", "b"], Some("token-1")));
        let second = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token() == Some("token-1"))
            .then_output(|| page(&["c"], None));
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&first, &second]);
        let storage = storage(client);

        let page_1 = storage
            .list()
            .bucket("test-bucket")
            .max_keys(2)
            .send()
            .await
            .unwrap();
        assert_eq!(vec!["a", "b"], page_1.keys());
        assert_eq!(Some("token-1"), page_1.continuation_token());

        let page_2 = storage
            .list()
            .bucket("test-bucket")
            .max_keys(2)
            .set_continuation_token(page_1.continuation_token().map(str::to_owned))
            .send()
            .await
            .unwrap();
        assert_eq!(vec!["c"], page_2.keys());
        assert!(!page_2.has_more());
    }

    #[tokio::test]
    async fn test_empty_next_token_is_last_page() {
        let list = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| page(&["a"], Some("")));
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list]);

        let output = storage(client)
            .list()
            .bucket("test-bucket")
            .send()
            .await
            .unwrap();
        assert_eq!(None, output.continuation_token());
    }
}
