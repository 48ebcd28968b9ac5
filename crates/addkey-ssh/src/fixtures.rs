// ABOUTME: Fixed public key lines produced by ssh-keygen, shared by unit tests.
// ABOUTME: Covers the algorithms that cannot be generated cheaply at test time.

/// `ssh-keygen -t rsa -b 2048 -C ops@bastion`
pub const RSA_LINE: &str = "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQCrZ6HOT6Z4DAp4fue+Vj6kRUuWkNNAAjCpgzF767DASWBpkWIu3lVFO/JywaN2AXzjmZv/qE356VX+hvpM9X3OzohEUzEDshXPWpFrrhTPQKy/n+xPpmI83f/ZxseH1qmY1CQKEa6zGF7XZg9OGjQMpeeX/LFZ3+cgQ5IuwUoU9c3cx7KxdTVZtUuJwobaWr/0P9sxu9TMUChILGhhgKyr4laWWIfTyByng16k+s1uE3Zv/NupB5J6NfBeG4vOz+irte080W4NYFlIRm/9tF9Xz26DvSmpbD3512e2DWUXSIzKGvHYa+SCHEo3Hc03RgX9qcI6C4ANzBaqxTgVWvtd ops@bastion";

/// `ssh-keygen -t dsa -C legacy@build`
pub const DSA_LINE: &str = "ssh-dss AAAAB3NzaC1kc3MAAACBAKAuFoFA2aLqH7ujnIl76AcMzQ0BqXHAojpZY+AHykL92LIm9y5U20ll2nkZleN/3bXh2bhnxv7hmnGxWumx1W3/OWMK6HTvT3iXcMg6+iuht/RaQOKKLr6zjdGDrlArN9ebW5Gvn9X7TdPVlzHmgUogv+qChkw/qKvn4iZOn/L5AAAAFQDYrVm49c5asH/KSNRuQl6N8k3PtwAAAIBfNKzi9EWD5ceFk2pFke6ptnY1SeyZh7ydeG/Xh+NoPdChtq7DUWbu5/0MhtxoS0SoCn1k62rPxy17OPva4DnfJtRrAVrnF2T2VCo2yIFPFhXQluaUI7MJ5CSU95/7J0LFZhlyZM0yGUV67+OTgpy1V6pW3fX/w2O3u+J+3bAKgAAAAIEAiOK35eyq0rsCs1qqDP5e8WGfj1ukeRE1JS14OIV357HdrFd2CxG+MsWlDuIi7FJUkGVfN6Q+kMIh8DuDaJAWvzktx+nAWbBbf8KOpgMfWme1PQjVabvxCwiJo5gwDLdg6te8a2KEXEJ6WQMrdF34omkfDY28eo+GIgBiDXzt7uA= legacy@build";

/// `ssh-keygen -t ecdsa -b 521 -C ci@runner`
pub const P521_LINE: &str = "ecdsa-sha2-nistp521 AAAAE2VjZHNhLXNoYTItbmlzdHA1MjEAAAAIbmlzdHA1MjEAAACFBACv2jbPTfCuKvqFLMpU3DQz98t4qCSUindfJNq1ljHWJb9QEJNyLz+bZT1efwSjN4R3b6lTqVsSJMbMwZRZYAiUxgH9sxSrAfe26vf7Xb5owVeBhw77vWEe1LIV0PQDH2Dozl8C9cmRLPk9QKeRFE2tECDFvBY9FL8Bly76QACydIfTBA== ci@runner";

/// Each fixture with its algorithm and comment.
pub const ALL: [(&str, &str, &str); 3] = [
    (RSA_LINE, "ssh-rsa", "ops@bastion"),
    (DSA_LINE, "ssh-dss", "legacy@build"),
    (P521_LINE, "ecdsa-sha2-nistp521", "ci@runner"),
];
