// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

use crate::model::{ClusterName, Component, ErrorKey, RuleHit};

const NODES_REQUIREMENTS: (&str, &str) = (
    "ccx_rules_ocp.external.rules.nodes_requirements_check.report",
    "NODES_MINIMUM_REQUIREMENTS_NOT_MET",
);
const BUG_1766907: (&str, &str) = (
    "ccx_rules_ocp.external.bug_rules.bug_1766907.report",
    "BUGZILLA_BUG_1766907",
);
const KUBELET_VERSION: (&str, &str) = (
    "ccx_rules_ocp.external.rules.nodes_kubelet_version_check.report",
    "NODE_KUBELET_VERSION",
);
const SAMPLES_IMAGE_IMPORT: (&str, &str) = (
    "ccx_rules_ocp.external.rules.samples_op_failed_image_import_check.report",
    "SAMPLES_FAILED_IMAGE_IMPORT_ERR",
);
const PROXY_AUTH: (&str, &str) = (
    "ccx_rules_ocp.external.rules.cluster_wide_proxy_auth_check.report",
    "AUTH_OPERATOR_PROXY_ERROR",
);

// 00000001-ffff-ffff-ffff-000000000000 is listed twice on purpose.
const NODES_REQUIREMENTS_CLUSTERS: &[&str] = &[
    "00000001-624a-49a5-bab8-4fdc5e51a266",
    "00000001-6577-4e80-85e7-697cb646ff37",
    "00000001-8933-4a3a-8634-3328fe806e08",
    "00000001-8d6a-43cc-b82c-7007664bdf69",
    "00000001-0000-0000-0000-000000000000",
    "00000001-1111-1111-1111-000000000000",
    "00000001-2222-2222-2222-000000000000",
    "00000001-3333-3333-3333-000000000000",
    "00000001-4444-4444-4444-000000000000",
    "00000001-5555-5555-5555-000000000000",
    "00000001-6666-6666-6666-000000000000",
    "00000001-7777-7777-7777-000000000000",
    "00000001-8888-8888-8888-000000000000",
    "00000001-9999-9999-9999-000000000000",
    "00000001-aaaa-aaaa-aaaa-000000000000",
    "00000001-bbbb-bbbb-bbbb-000000000000",
    "00000001-cccc-cccc-cccc-000000000000",
    "00000001-dddd-dddd-dddd-000000000000",
    "00000001-ffff-ffff-ffff-000000000000",
    "00000001-ffff-ffff-ffff-000000000000",
    "34c3ecc5-624a-49a5-bab8-4fdc5e51a266",
    "74ae54aa-6577-4e80-85e7-697cb646ff37",
    "a7467445-8d6a-43cc-b82c-7007664bdf69",
    "ee7d2bf4-8933-4a3a-8634-3328fe806e08",
];

const BUG_1766907_CLUSTERS: &[&str] = &[
    "00000001-6577-4e80-85e7-697cb646ff37",
    "00000001-8d6a-43cc-b82c-7007664bdf69",
    "00000001-1111-1111-1111-000000000000",
    "00000001-3333-3333-3333-000000000000",
    "00000001-5555-5555-5555-000000000000",
    "00000001-7777-7777-7777-000000000000",
    "00000001-9999-9999-9999-000000000000",
    "00000001-bbbb-bbbb-bbbb-000000000000",
    "00000001-dddd-dddd-dddd-000000000000",
    "00000001-ffff-ffff-ffff-000000000000",
    "74ae54aa-6577-4e80-85e7-697cb646ff37",
    "ee7d2bf4-8933-4a3a-8634-3328fe806e08",
];

const KUBELET_VERSION_CLUSTERS: &[&str] = &[
    "00000001-8d6a-43cc-b82c-7007664bdf69",
    "00000001-3333-3333-3333-000000000000",
    "00000001-7777-7777-7777-000000000000",
    "00000001-bbbb-bbbb-bbbb-000000000000",
    "00000001-ffff-ffff-ffff-000000000000",
    "ee7d2bf4-8933-4a3a-8634-3328fe806e08",
];

const SAMPLES_IMAGE_IMPORT_CLUSTERS: &[&str] = &[
    "00000001-8d6a-43cc-b82c-7007664bdf69",
    "00000001-3333-3333-3333-000000000000",
    "00000001-7777-7777-7777-000000000000",
];

const PROXY_AUTH_CLUSTERS: &[&str] = &[
    "00000001-8d6a-43cc-b82c-7007664bdf69",
    "00000001-3333-3333-3333-000000000000",
];

pub(super) fn load() -> Vec<RuleHit> {
    let groups: [((&str, &str), &[&str]); 5] = [
        (NODES_REQUIREMENTS, NODES_REQUIREMENTS_CLUSTERS),
        (BUG_1766907, BUG_1766907_CLUSTERS),
        (KUBELET_VERSION, KUBELET_VERSION_CLUSTERS),
        (SAMPLES_IMAGE_IMPORT, SAMPLES_IMAGE_IMPORT_CLUSTERS),
        (PROXY_AUTH, PROXY_AUTH_CLUSTERS),
    ];

    groups
        .iter()
        .flat_map(|((component, error_key), clusters)| {
            clusters.iter().map(move |cluster| RuleHit {
                component: Component::from(*component),
                error_key: ErrorKey::from(*error_key),
                cluster: ClusterName::new_unchecked(*cluster),
            })
        })
        .collect()
}
