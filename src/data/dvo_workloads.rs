// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::model::{ClusterName, DvoWorkload};

const HOST_NETWORK: (&str, &str, &str) = (
    "host_network",
    "Alert on pods/deployment-likes with sharing host's network namespace",
    "Ensure the host's network namespace is not shared.",
);
const HOST_PID: (&str, &str, &str) = (
    "host_pid",
    "Alert on pods/deployment-likes with sharing host's process namespace",
    "Ensure the host's process namespace is not shared.",
);
const NON_ISOLATED_POD: (&str, &str, &str) = (
    "non_isolated_pod",
    "Alert on deployment-like objects that are not selected by any NetworkPolicy.",
    "Ensure pod does not accept unsafe traffic by isolating it with a NetworkPolicy. See https://cloud.redhat.com/blog/guide-to-kubernetes-ingress-network-policies for more details.",
);
const UNSET_MEMORY_REQUIREMENTS: (&str, &str, &str) = (
    "unset_memory_requirements",
    "Indicates when containers do not have memory requests and limits set.",
    "Set memory requests and limits for your container based on its requirements.",
);

fn workload(
    (rule, description, remediation): (&str, &str, &str),
    kind: &str,
    namespace_uid: &str,
    uid: &str,
) -> DvoWorkload {
    DvoWorkload {
        rule: rule.to_string(),
        check_description: description.to_string(),
        check_remediation: remediation.to_string(),
        kind: kind.to_string(),
        namespace_uid: namespace_uid.to_string(),
        uid: uid.to_string(),
    }
}

pub(super) fn load() -> BTreeMap<ClusterName, Vec<DvoWorkload>> {
    let first_cluster = vec![
        workload(
            HOST_NETWORK,
            "DaemonSet",
            "fbcbe2d3-e398-4b40-9d5e-4eb46fe8286f",
            "be466de5-12fb-4710-bf70-62deb38ae563",
        ),
        workload(
            HOST_NETWORK,
            "DaemonSet",
            "e6ed9bb3-efc3-46a6-b3ae-3f1a6e59546c",
            "da5a07e1-3273-4056-8914-2732beb41b4c",
        ),
        workload(
            HOST_PID,
            "DaemonSet",
            "e6ed9bb3-efc3-46a6-b3ae-3f1a6e59546c",
            "da5a07e1-3273-4056-8914-2732beb41b4c",
        ),
        workload(
            HOST_PID,
            "DaemonSet",
            "d00b47da-fc6f-4c72-abc1-94f525441c75",
            "fec695db-b904-4865-b8e6-068f491c9a3b",
        ),
        workload(
            NON_ISOLATED_POD,
            "CronJob",
            "4354a80c-a7a6-405b-bfa6-9666b24e3b48",
            "7b97edf7-8627-4f0e-a36f-822ccab0a0ae",
        ),
        workload(
            NON_ISOLATED_POD,
            "CronJob",
            "4354a80c-a7a6-405b-bfa6-9666b24e3b48",
            "d641d1b5-a574-469e-82a1-3a4f985e2ddb",
        ),
    ];

    let second_cluster = vec![
        workload(
            UNSET_MEMORY_REQUIREMENTS,
            "Deployment",
            "6a3e4b2c-79f5-4a5d-9d5c-3b2b8a6c1f20",
            "0b4f2f86-61a3-4f3e-a2d9-5b9a38dc2f11",
        ),
        workload(
            UNSET_MEMORY_REQUIREMENTS,
            "StatefulSet",
            "6a3e4b2c-79f5-4a5d-9d5c-3b2b8a6c1f20",
            "5e0c1a77-2a0e-4b8b-9f43-71d6c6a0f8e2",
        ),
        workload(
            NON_ISOLATED_POD,
            "Deployment",
            "6a3e4b2c-79f5-4a5d-9d5c-3b2b8a6c1f20",
            "0b4f2f86-61a3-4f3e-a2d9-5b9a38dc2f11",
        ),
    ];

    BTreeMap::from([
        (
            ClusterName::new_unchecked("34c3ecc5-624a-49a5-bab8-4fdc5e51a266"),
            first_cluster,
        ),
        (
            ClusterName::new_unchecked("74ae54aa-6577-4e80-85e7-697cb646ff37"),
            second_cluster,
        ),
        (
            ClusterName::new_unchecked("eeeeeeee-eeee-eeee-eeee-000000000001"),
            Vec::new(),
        ),
    ])
}
