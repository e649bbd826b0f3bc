use jiff::{SignedDuration, Timestamp};
use minitube_core::{Repository, StoreError, Video};
use minitube_generator::Generator;
use tracing::info;

/// One entry of the demo catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleVideo {
    pub title: &'static str,
    pub description: &'static str,
    pub video_url: &'static str,
    pub thumbnail_url: &'static str,
    pub duration: u64,
    pub views: u64,
}

const SAMPLE_CATALOG: [SampleVideo; 12] = [
    SampleVideo {
        title: "Introduction to React with TypeScript",
        description: "Learn how to build modern React applications using TypeScript. This tutorial covers components, hooks, and type safety.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 354,
        views: 12_500,
    },
    SampleVideo {
        title: "Building REST APIs with Node.js and Express",
        description: "Complete guide to creating RESTful APIs using Node.js, Express, and MongoDB. Includes authentication and error handling.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 428,
        views: 8_900,
    },
    SampleVideo {
        title: "Tailwind CSS Crash Course",
        description: "Learn Tailwind CSS from scratch. Build responsive, modern websites without writing custom CSS.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1633356122102-3fe601e05bd2?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 276,
        views: 15_600,
    },
    SampleVideo {
        title: "MongoDB Aggregation Pipeline Tutorial",
        description: "Deep dive into MongoDB aggregation framework. Learn about $match, $group, $project, and more advanced stages.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 512,
        views: 7_200,
    },
    SampleVideo {
        title: "Full Stack MERN Application Development",
        description: "Build a complete MERN stack application from start to deployment. Includes React, Node.js, Express, and MongoDB integration.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 623,
        views: 21_000,
    },
    SampleVideo {
        title: "TypeScript for JavaScript Developers",
        description: "Transition from JavaScript to TypeScript. Learn about types, interfaces, generics, and advanced TypeScript features.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1516116216624-53e697fedbea?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 387,
        views: 14_300,
    },
    SampleVideo {
        title: "React Hooks Deep Dive",
        description: "Master React Hooks including useState, useEffect, useContext, and custom hooks. Real-world examples and best practices.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerMeltdowns.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1635776062127-d379bfcba9f8?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 445,
        views: 18_200,
    },
    SampleVideo {
        title: "Docker for Developers",
        description: "Learn Docker containerization for your applications. Includes Dockerfile, Docker Compose, and deployment strategies.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/Sintel.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1627398242454-45a1465c2479?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 498,
        views: 9_600,
    },
    SampleVideo {
        title: "GraphQL vs REST: Which to Choose?",
        description: "Comparison between GraphQL and REST APIs. Learn when to use each technology and their pros and cons.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/SubaruOutbackOnStreetAndDirt.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 334,
        views: 11_200,
    },
    SampleVideo {
        title: "Microservices Architecture Patterns",
        description: "Learn about microservices architecture, communication patterns, service discovery, and deployment strategies.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/TearsOfSteel.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 567,
        views: 7_800,
    },
    SampleVideo {
        title: "Web Performance Optimization",
        description: "Techniques to improve website performance including lazy loading, code splitting, caching, and image optimization.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/VolkswagenGTIReview.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1547658719-da2b51169166?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 412,
        views: 16_500,
    },
    SampleVideo {
        title: "CI/CD Pipeline with GitHub Actions",
        description: "Set up continuous integration and deployment using GitHub Actions. Automate testing and deployment for your projects.",
        video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/WhatCarCanYouGetForAGrand.mp4",
        thumbnail_url: "https://images.unsplash.com/photo-1551135049-8a33b42738c4?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80",
        duration: 389,
        views: 8_900,
    },
];

/// The demo catalog, in listing order.
pub fn sample_catalog() -> &'static [SampleVideo] {
    &SAMPLE_CATALOG
}

/// Clears the repository and inserts the demo catalog.
///
/// Records go straight to the repository so their preset view counts
/// survive. Upload dates are staggered one second apart counting back from
/// `now`, so the catalog lists in its declared order.
pub async fn seed_catalog<R, G>(
    repository: &R,
    generator: &G,
    now: Timestamp,
) -> Result<Vec<Video>, StoreError>
where
    R: Repository,
    G: Generator,
{
    let existing = repository.list().await?;
    for video in &existing {
        repository.delete(&video.id).await?;
    }
    info!(removed = existing.len(), "cleared existing videos");

    let mut seeded = Vec::with_capacity(SAMPLE_CATALOG.len());
    for (offset, sample) in (0_i64..).zip(SAMPLE_CATALOG.iter()) {
        let video = Video {
            id: generator.generate().into(),
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            video_url: sample.video_url.to_string(),
            thumbnail_url: sample.thumbnail_url.to_string(),
            duration: sample.duration,
            views: sample.views,
            upload_date: now - SignedDuration::from_secs(offset),
        };
        repository.insert(video.clone()).await?;
        info!(id = %video.id, title = %video.title, duration = video.duration, "seeded video");
        seeded.push(video);
    }

    info!(count = seeded.len(), "seeded demo catalog");
    Ok(seeded)
}
