// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod utils;

#[cfg(test)]
mod parse_aut_num_tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use rpsl_policy::commands::{INPUT, PARSE_AUT_NUM, VERBOSE};
    use rpsl_policy::utils::reader::Reader;
    use rpsl_policy::utils::writer::{WriteBuffer::Vec as WBVec, Writer};

    use crate::utils::{
        get_full_path_for_resource_file, get_reader_for_str, output_lines, CommandTestRunner,
        StatusCode,
    };

    #[derive(Default)]
    struct ParseAutNumTestRunner<'args> {
        input: Option<&'args str>,
        verbose: bool,
    }

    impl<'args> ParseAutNumTestRunner<'args> {
        fn input(&'args mut self, arg: &'args str) -> &'args mut ParseAutNumTestRunner {
            self.input = Some(arg);
            self
        }

        fn verbose(&'args mut self) -> &'args mut ParseAutNumTestRunner {
            self.verbose = true;
            self
        }
    }

    impl<'args> CommandTestRunner for ParseAutNumTestRunner<'args> {
        fn build_args(&self) -> Vec<String> {
            let mut args = vec![String::from(PARSE_AUT_NUM)];

            if let Some(input) = self.input {
                args.push(format!("-{}", INPUT.1));
                args.push(get_full_path_for_resource_file(&format!("resources/{}", input)));
            }

            if self.verbose {
                args.push(format!("--{}", VERBOSE.0));
            }

            args
        }
    }

    fn empty_reader() -> Reader {
        get_reader_for_str("")
    }

    #[test]
    fn test_irr_dump_from_file() {
        let mut reader = empty_reader();
        let mut writer = Writer::new(WBVec(vec![]), WBVec(vec![]));
        let status_code = ParseAutNumTestRunner::default()
            .input("aut-num/irr-dump.rpsl")
            .run(&mut writer, &mut reader);

        assert_eq!(StatusCode::SUCCESS, status_code);

        let errors = writer.err_to_string().unwrap();
        let errors = errors.lines().collect::<Vec<&str>>();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], "Ignoring protocol-1: BGP4.");
        assert_eq!(errors[1], "Ignoring protocol-2: OSPF.");
        assert!(errors[2].starts_with(r#"Skipping complex logic in {"afi-list":["ipv4"],"refine":"#));
        assert!(errors[3].ends_with("parsing `from AS65001 accept`."));

        let lines = output_lines(writer);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            json!({
                "imports": {
                    "any": {"any": [
                        {
                            "mp_peerings": [{"mp_peering": {"as_expr": "AS690"}, "actions": {"pref": "100"}}],
                            "mp_filter": ["ANY"]
                        },
                        {
                            "mp_peerings": [{
                                "mp_peering": {"as_expr": "AS2914"},
                                "actions": {
                                    "pref": "200",
                                    "community": [{"method": "=", "args": ["2914:410"]}]
                                }
                            }],
                            "mp_filter": ["AS2914:AS-GLOBAL"]
                        },
                        {
                            "mp_peerings": [{"mp_peering": {"as_expr": "AS690"}}],
                            "mp_filter": ["ANY"]
                        }
                    ]},
                    "ipv6": {"unicast": [{
                        "mp_peerings": [{
                            "mp_peering": {
                                "as_expr": "AS3356",
                                "router_expr1": "2001:db8::2",
                                "router_expr2": "2001:db8::1"
                            },
                            "actions": {
                                "community": [{"method": "append", "args": ["3356:123"]}],
                                "aspath": [{"method": "prepend", "args": ["AS590", "AS590"]}]
                            }
                        }],
                        "mp_filter": {"and": {
                            "left": ["AS-FOO"],
                            "right": {"not": [["2001:db8::/32^+"]]}
                        }}
                    }]}
                },
                "exports": {
                    "any": {
                        "any": [{
                            "mp_peerings": [{"mp_peering": {"as_expr": "AS690"}}],
                            "mp_filter": ["AS590"]
                        }],
                        "unicast": [
                            {"mp_peerings": [{"mp_peering": {"as_expr": "AS1"}}], "mp_filter": ["AS-SELF"]},
                            {"mp_peerings": [{"mp_peering": {"as_expr": "AS2"}}], "mp_filter": ["ANY"]}
                        ]
                    }
                }
            })
        );
        assert_eq!(
            lines[1],
            json!({
                "imports": {},
                "exports": {"ipv4": {"any": [{
                    "mp_peerings": [{"mp_peering": {"as_expr": "AS65001"}}],
                    "mp_filter": ["AS65000"]
                }]}}
            })
        );
    }

    #[test]
    fn test_stdin_input() {
        let mut reader = get_reader_for_str(indoc! {r#"
            aut-num:    AS1
            import:     from AS2 accept AS2
            mp-import:  afi ipv4.unicast from AS3 accept AS3
            mp-import:  afi ipv4.unicast from AS4 accept AS4
        "#});
        let mut writer = Writer::new(WBVec(vec![]), WBVec(vec![]));
        let status_code = ParseAutNumTestRunner::default()
            .verbose()
            .run(&mut writer, &mut reader);

        assert_eq!(StatusCode::SUCCESS, status_code);
        assert_eq!(writer.err_to_string().unwrap(), "");
        assert_eq!(
            output_lines(writer),
            vec![json!({
                "imports": {
                    "any": {"any": [{"mp_peerings": [{"mp_peering": {"as_expr": "AS2"}}], "mp_filter": ["AS2"]}]},
                    "ipv4": {"unicast": [
                        {"mp_peerings": [{"mp_peering": {"as_expr": "AS3"}}], "mp_filter": ["AS3"]},
                        {"mp_peerings": [{"mp_peering": {"as_expr": "AS4"}}], "mp_filter": ["AS4"]}
                    ]}
                },
                "exports": {}
            })]
        );
    }

    #[test]
    fn test_other_objects_are_ignored() {
        let mut reader = get_reader_for_str(indoc! {r#"
            route:      192.0.2.0/24
            origin:     AS1

            as-set:     AS-FOO
            members:    AS1, AS2
        "#});
        let mut writer = Writer::new(WBVec(vec![]), WBVec(vec![]));
        let status_code = ParseAutNumTestRunner::default().run(&mut writer, &mut reader);

        assert_eq!(StatusCode::SUCCESS, status_code);
        assert_eq!(writer.into_string().unwrap(), "");
    }

    #[test]
    fn test_aut_num_without_policies() {
        let mut reader = get_reader_for_str("aut-num: AS1\nas-name: NO-POLICY\n");
        let mut writer = Writer::new(WBVec(vec![]), WBVec(vec![]));
        let status_code = ParseAutNumTestRunner::default().run(&mut writer, &mut reader);

        assert_eq!(StatusCode::SUCCESS, status_code);
        assert_eq!(
            writer.into_string().unwrap(),
            "{\"imports\":{},\"exports\":{}}\n"
        );
    }

    #[test]
    fn test_missing_input_file() {
        let mut reader = empty_reader();
        let mut writer = Writer::new(WBVec(vec![]), WBVec(vec![]));
        let status_code = ParseAutNumTestRunner::default()
            .input("aut-num/does-not-exist.rpsl")
            .run(&mut writer, &mut reader);

        assert_eq!(StatusCode::INTERNAL_FAILURE, status_code);
        assert!(writer.err_to_string().unwrap().starts_with("Error occurred I/O error"));
    }
}
