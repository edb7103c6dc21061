//! Compiled-in catalog content.

use once_cell::sync::Lazy;

use crate::catalog::Catalog;
use crate::types::{IconRef, ResourceRecord, TopicRecord};

pub(crate) static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::from_parts(resources(), topics()));

fn resources() -> Vec<ResourceRecord> {
    vec![ResourceRecord {
        id: "containers-101".into(),
        title: "Head First Containers & Orchestration".into(),
        subtitle: "Docker • Pods • Kubernetes • OpenShift".into(),
        level: "Beginner".into(),
        estimated_minutes: 25,
        tags: vec!["Docker".into(), "Kubernetes".into(), "OpenShift".into()],
        resource_url: "/pdfs/HeadFirst_Containers_With_Diagrams.pdf".into(),
        updated_date: "2026-02-09".into(),
    }]
}

fn topics() -> Vec<TopicRecord> {
    [
        (
            "Docker",
            "Images, containers, Dockerfile, registry — explained like a human.",
            IconRef::FileText,
        ),
        (
            "Kubernetes",
            "Pods, Deployments, Services, Ingress, scaling, and cluster basics.",
            IconRef::Rocket,
        ),
        (
            "OpenShift",
            "Kubernetes + enterprise security + developer platform features.",
            IconRef::Shield,
        ),
        (
            "Tools (Coming Soon)",
            "Safe test-data generators, cheat sheets, and mini utilities.",
            IconRef::Wrench,
        ),
    ]
    .into_iter()
    .map(|(title, description, icon)| TopicRecord {
        title: title.into(),
        description: description.into(),
        icon,
    })
    .collect()
}
