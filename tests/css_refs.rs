//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use docref::{extract_css_refs, rewrite_css_refs, MimeTable};

    const DOCUMENT_KEY: &str = "fixture/f0.css";

    const FIXTURE_CSS: &str = r##"body {
  background: url(image/rwby.png);
}

div.a {
  background-image: url('../image/rwby.png');
}

div.b {
  background: #fff url("/image/rwby.png") no-repeat;
}

div.c {
  background: url( //www.abc.com/image/rwby.png );
}

div.d {
  background: URL('//www.abc.com/image/rwby.png');
}

div.e {
  background: url( "//www.abc.com/image /rwby.png" );
}

div.f {
  background: url(\\www.abc.com\image\rwby.png);
}

div.g {
  background: url();
}

@font-face {
  src: url(/abc);
}
"##;

    #[test]
    fn extraction_rebases_relative_references() {
        let refs = extract_css_refs(FIXTURE_CSS, Some(DOCUMENT_KEY));

        assert_eq!(refs, vec![
            "fixture/image/rwby.png",
            "image/rwby.png",
            "/image/rwby.png",
            "//www.abc.com/image/rwby.png",
            "//www.abc.com/image/rwby.png",
            "//www.abc.com/image/rwby.png",
            "//www.abc.com/image/rwby.png",
            "/abc",
        ]);
    }

    #[test]
    fn extraction_without_a_key_returns_logical_urls() {
        let refs = extract_css_refs(FIXTURE_CSS, None);

        assert_eq!(refs, vec![
            "image/rwby.png",
            "../image/rwby.png",
            "/image/rwby.png",
            "//www.abc.com/image/rwby.png",
            "//www.abc.com/image/rwby.png",
            "//www.abc.com/image/rwby.png",
            "//www.abc.com/image/rwby.png",
            "/abc",
        ]);
    }

    #[test]
    fn extraction_preserves_order_and_duplicates() {
        let css = ".a { background: url(x.png); } .b { background: url(x.png); }";
        let refs = extract_css_refs(css, None);

        assert_eq!(refs, vec!["x.png", "x.png"]);
    }

    #[test]
    fn noop_policy_leaves_the_text_byte_identical() {
        let mimes = MimeTable::default();
        let rewritten = rewrite_css_refs(FIXTURE_CSS, Some(DOCUMENT_KEY), &mimes, |_, _, _| None);

        assert_eq!(rewritten, FIXTURE_CSS);
    }

    #[test]
    fn empty_string_results_count_as_no_change() {
        let mimes = MimeTable::default();
        let rewritten = rewrite_css_refs(FIXTURE_CSS, Some(DOCUMENT_KEY), &mimes, |_, _, _| {
            Some(String::new())
        });

        assert_eq!(rewritten, FIXTURE_CSS);
    }

    #[test]
    fn policy_receives_resolved_url_mime_and_absoluteness() {
        let mimes = MimeTable::default();
        let rewritten = rewrite_css_refs(
            ".a { background: url('image/rwby.png'); } .b { cursor: url(/abc); }",
            Some(DOCUMENT_KEY),
            &mimes,
            |url, mime, absolute| {
                assert!(!absolute);
                Some(format!("{}?m={}", url, mime))
            },
        );

        assert_eq!(
            rewritten,
            ".a { background: url(fixture/image/rwby.png?m=image/png); } \
             .b { cursor: url(/abc?m=text/plain); }"
        );
    }

    #[test]
    fn absolute_references_are_passed_through_unresolved() {
        let mimes = MimeTable::default();
        let rewritten = rewrite_css_refs(
            ".c { background: url( //www.abc.com/image/rwby.png ); }",
            Some(DOCUMENT_KEY),
            &mimes,
            |url, _, absolute| {
                assert!(absolute);
                Some(url.to_string())
            },
        );

        assert_eq!(
            rewritten,
            ".c { background: url(//www.abc.com/image/rwby.png); }"
        );
    }

    #[test]
    fn identity_rewrite_round_trips_extraction() {
        let mimes = MimeTable::default();
        let rewritten = rewrite_css_refs(FIXTURE_CSS, Some(DOCUMENT_KEY), &mimes, |url, _, _| {
            Some(url.to_string())
        });

        assert_eq!(
            extract_css_refs(&rewritten, None),
            extract_css_refs(FIXTURE_CSS, Some(DOCUMENT_KEY))
        );
    }
}
