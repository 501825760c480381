// ABOUTME: Projection of internal store records into external container views.
// ABOUTME: State and creation time come from a single status snapshot.

use crate::cri;
use crate::store;

/// Build the external view of a store record.
///
/// Records without a config project to default metadata, image and empty maps.
pub fn to_cri_container(container: &store::Container) -> cri::Container {
    let status = container.status().get();

    let (metadata, image, labels, annotations) = match container.config() {
        Some(config) => (
            config.metadata.clone(),
            config.image.clone(),
            config.labels.clone(),
            config.annotations.clone(),
        ),
        None => {
            tracing::debug!(container = %container.id(), "container has no config");
            Default::default()
        }
    };

    cri::Container {
        id: container.id().to_string(),
        pod_sandbox_id: container.sandbox_id().to_string(),
        metadata,
        image,
        image_ref: container.image_ref().to_string(),
        state: status.state(),
        created_at: status.created_at,
        labels,
        annotations,
    }
}
