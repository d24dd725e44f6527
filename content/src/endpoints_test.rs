use super::*;

#[test]
fn testimonials_list_and_mutate_on_different_prefixes() {
    assert_eq!(ResourceKind::Testimonial.collection_path(), "/api/home/testimonials");
    assert_eq!(ResourceKind::Testimonial.create_path(), "/api/testimonials");
    assert_eq!(ResourceKind::Testimonial.item_path(3), "/api/testimonials/3");
}

#[test]
fn contact_submissions_create_through_submit() {
    assert_eq!(ResourceKind::ContactSubmission.create_path(), "/api/contact/submit");
    assert_eq!(ResourceKind::ContactSubmission.item_path(9), "/api/contact/submissions/9");
}

#[test]
fn supported_operations_follow_the_api() {
    assert!(ResourceKind::Service.supports(Operation::Get));
    assert!(ResourceKind::Project.supports(Operation::Update));
    assert!(!ResourceKind::TeamMember.supports(Operation::Get));
    assert!(ResourceKind::TeamMember.supports(Operation::Update));
    assert!(!ResourceKind::ContactSubmission.supports(Operation::Update));
    assert!(!ResourceKind::ContactSubmission.supports(Operation::Get));
    assert!(ResourceKind::ContactSubmission.supports(Operation::Delete));
}

#[test]
fn contact_submissions_are_created_through_the_public_form() {
    assert!(ResourceKind::ContactSubmission.supports(Operation::Create));
    for kind in ResourceKind::ALL {
        assert!(kind.supports(Operation::Create), "{kind:?}");
    }
}

#[test]
fn unsupported_text_names_kind_and_operation() {
    assert_eq!(
        ResourceKind::ContactSubmission.unsupported(Operation::Update),
        "Contact Submissions does not support update"
    );
}

#[test]
fn route_resolves_collection_and_item_paths() {
    assert_eq!(ResourceKind::route("/api/blog/posts"), Some((ResourceKind::BlogPost, None)));
    assert_eq!(ResourceKind::route("/api/blog/posts/12"), Some((ResourceKind::BlogPost, Some(12))));
    assert_eq!(ResourceKind::route("/api/testimonials/2"), Some((ResourceKind::Testimonial, Some(2))));
    assert_eq!(ResourceKind::route("/api/daily-activities/"), Some((ResourceKind::DailyActivity, None)));
    assert_eq!(ResourceKind::route("/api/unknown"), None);
}

#[test]
fn slugs_round_trip_for_every_kind() {
    for kind in ResourceKind::ALL {
        assert_eq!(ResourceKind::from_slug(kind.slug()), Some(kind));
    }
}
