//! Canned advisor replies. Each builder takes only the profile-derived
//! values it interpolates; an absent value leaves its line blank.

/// Careers the advisor may suggest; three are sampled per reply.
pub const SUGGESTED_CAREERS: &[&str] = &[
    "Software Developer",
    "Data Scientist",
    "Digital Marketing Manager",
    "UX/UI Designer",
    "Project Manager",
    "Business Analyst",
    "Product Manager",
    "Cybersecurity Specialist",
];

pub const CAREERS_PER_REPLY: usize = 3;

pub fn greeting(name: &str) -> String {
    let name = if name.is_empty() {
        String::new()
    } else {
        format!(" {name}")
    };
    format!(
        "Hello{name}! I'm your AI career advisor. I'm here to help you with career guidance, \
         job market insights, and personalized recommendations. What would you like to know \
         about your career path?"
    )
}

pub fn skills_reply(interests: &[String]) -> String {
    let interest_line = if interests.is_empty() {
        String::new()
    } else {
        format!(
            "Given your interests in {}, I'd especially recommend focusing on skills that \
             combine these areas with technology.",
            first_joined(interests, 2, " and ")
        )
    };
    format!(
        "Based on current market trends, I'd recommend focusing on these high-demand skills:\n\
         \n\
         • **Technical Skills**: Programming (Python, JavaScript), Data Analysis, Cloud Computing (AWS, Azure)\n\
         • **Soft Skills**: Leadership, Communication, Problem-solving, Adaptability\n\
         • **Digital Skills**: Digital Marketing, UX/UI Design, Project Management tools\n\
         \n\
         {interest_line}\n\
         \n\
         Would you like me to suggest specific courses or certifications for any of these areas?"
    )
}

pub fn careers_reply(careers: &[&str], skills: &[String]) -> String {
    let listed = careers
        .iter()
        .enumerate()
        .map(|(i, career)| {
            format!(
                "**{}. {career}**\n\
                 • High growth potential and competitive salaries\n\
                 • Strong demand across multiple industries\n\
                 • Opportunities for remote work and career advancement",
                i + 1
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    let skills_line = if skills.is_empty() {
        String::new()
    } else {
        format!(
            "Your existing skills in {} align well with these opportunities.",
            first_joined(skills, 2, " and ")
        )
    };
    format!(
        "Based on your profile and current market demand, here are some promising career paths:\n\
         \n\
         {listed}\n\
         \n\
         {skills_line}\n\
         \n\
         Would you like me to provide more details about any of these careers, including \
         required skills and typical career progression?"
    )
}

pub const SALARY_REPLY: &str = "Here's an overview of salary ranges for popular career paths:\n\
\n\
**Technology Sector:**\n\
• Software Developer: $70,000 - $150,000+\n\
• Data Scientist: $80,000 - $160,000+\n\
• Cybersecurity Specialist: $75,000 - $140,000+\n\
\n\
**Business & Marketing:**\n\
• Digital Marketing Manager: $60,000 - $120,000+\n\
• Product Manager: $90,000 - $180,000+\n\
• Business Analyst: $65,000 - $130,000+\n\
\n\
**Design & Creative:**\n\
• UX/UI Designer: $65,000 - $130,000+\n\
• Graphic Designer: $40,000 - $80,000+\n\
\n\
Salaries vary significantly based on location, experience, company size, and specific skills. \
Major tech hubs typically offer higher compensation but also have higher living costs.\n\
\n\
Would you like me to provide more specific information about salaries in your area or for particular roles?";

pub const TRENDS_REPLY: &str = "Here are the key job market trends shaping the future of work:\n\
\n\
**🚀 High-Growth Areas:**\n\
• Artificial Intelligence & Machine Learning\n\
• Cybersecurity & Data Privacy\n\
• Renewable Energy & Sustainability\n\
• Healthcare Technology & Telemedicine\n\
• E-commerce & Digital Transformation\n\
\n\
**💼 In-Demand Skills:**\n\
• Cloud Computing & DevOps\n\
• Data Analysis & Visualization\n\
• Digital Marketing & SEO\n\
• Remote Collaboration Tools\n\
• Emotional Intelligence & Leadership\n\
\n\
**🔮 Future Outlook:**\n\
• Hybrid/remote work is becoming permanent\n\
• Continuous learning is essential for career growth\n\
• Soft skills are increasingly valued alongside technical skills\n\
• Green jobs and sustainability roles are expanding rapidly\n\
\n\
The key is to stay adaptable and continuously update your skills. Which of these trends interests you most?";

pub fn resume_reply(skills: &[String]) -> String {
    let skills_line = if skills.is_empty() {
        String::new()
    } else {
        format!(
            "Make sure to highlight your skills in {} prominently in your skills section.",
            first_joined(skills, 3, ", ")
        )
    };
    format!(
        "Here are key tips for creating a standout resume:\n\
         \n\
         **📝 Structure & Format:**\n\
         • Keep it to 1-2 pages maximum\n\
         • Use a clean, professional format with consistent styling\n\
         • Include contact info, professional summary, experience, education, and skills\n\
         \n\
         **🎯 Content Tips:**\n\
         • Use action verbs and quantify achievements (e.g., \"Increased sales by 25%\")\n\
         • Tailor your resume for each job application\n\
         • Include relevant keywords from the job posting\n\
         • Focus on results and impact, not just responsibilities\n\
         \n\
         **✨ Modern Resume Trends:**\n\
         • Add a professional summary instead of an objective\n\
         • Include links to your LinkedIn profile and portfolio\n\
         • Use bullet points for easy scanning\n\
         • Consider adding relevant certifications and volunteer work\n\
         \n\
         {skills_line}\n\
         \n\
         Would you like me to help you craft a professional summary or review specific sections \
         of your resume?"
    )
}

pub fn default_reply(assessment_completed: bool) -> String {
    let assessment_line = if assessment_completed {
        "Since you've completed your assessment, I can provide more personalized advice based on your profile."
    } else {
        "Consider completing the career assessment for more personalized recommendations!"
    };
    format!(
        "That's a great question! As your AI career advisor, I can help you with:\n\
         \n\
         • **Career Path Planning**: Discover roles that match your interests and skills\n\
         • **Skill Development**: Identify gaps and recommend learning resources\n\
         • **Job Market Insights**: Stay updated on trends and opportunities\n\
         • **Resume & Interview Prep**: Get tips for job applications\n\
         • **Salary Negotiation**: Understand market rates and negotiation strategies\n\
         \n\
         {assessment_line}\n\
         \n\
         What specific aspect of your career would you like to explore today?"
    )
}

fn first_joined(labels: &[String], n: usize, separator: &str) -> String {
    labels
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_greeting_with_and_without_name() {
        assert!(greeting("Ada").starts_with("Hello Ada! I'm your AI career advisor."));
        assert!(greeting("").starts_with("Hello! I'm your AI career advisor."));
    }

    #[test]
    fn test_skills_reply_uses_first_two_interests() {
        let reply = skills_reply(&labels(&[
            "Engineering",
            "Real Estate",
            "Design & Creativity",
        ]));
        assert!(reply.contains("Given your interests in Engineering and Real Estate, I'd"));
        assert!(!reply.contains("Design & Creativity"));
    }

    #[test]
    fn test_skills_reply_blank_line_without_interests() {
        let reply = skills_reply(&[]);
        assert!(reply.contains("Adaptability\n• **Digital Skills**"));
        assert!(reply.contains("Project Management tools\n\n\n\nWould you like me"));
    }

    #[test]
    fn test_careers_reply_numbers_each_career() {
        let reply = careers_reply(&["Data Scientist", "Project Manager"], &[]);
        assert!(reply.contains("**1. Data Scientist**\n• High growth potential"));
        assert!(reply.contains("career advancement\n\n**2. Project Manager**"));
        assert!(!reply.contains("Your existing skills"));
    }

    #[test]
    fn test_resume_reply_lists_three_skills() {
        let reply = resume_reply(&labels(&["Leadership", "Consulting", "Communication", "Sales & Negotiation"]));
        assert!(reply.contains("highlight your skills in Leadership, Consulting, Communication prominently"));
        assert!(reply.contains("\"Increased sales by 25%\""));
    }

    #[test]
    fn test_default_reply_depends_on_completion() {
        assert!(default_reply(true).contains("Since you've completed your assessment"));
        assert!(default_reply(false).contains("Consider completing the career assessment"));
    }

    #[test]
    fn test_static_replies_have_expected_sections() {
        assert!(SALARY_REPLY.contains("• Product Manager: $90,000 - $180,000+"));
        assert!(SALARY_REPLY.contains("specific skills. Major tech hubs"));
        assert!(TRENDS_REPLY.contains("**🔮 Future Outlook:**"));
    }
}
